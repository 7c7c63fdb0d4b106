use crate::core::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Filesystem storage rooted at `base_path`; absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PairError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_relative_to_base() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"1, 2, 2020-01-01, NULL").unwrap();

        let storage = LocalStorage::new(dir.path());
        let data = storage.read_file("a.txt").await.unwrap();
        assert_eq!(data, b"1, 2, 2020-01-01, NULL");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let err = storage.read_file("nope.txt").await.unwrap_err();
        assert!(matches!(err, PairError::IoError(_)));
    }
}
