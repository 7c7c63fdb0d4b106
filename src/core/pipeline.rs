use crate::core::{grouping, ingest, report, span};
use crate::core::{AssignmentRecord, Clock, ConfigProvider, Pipeline, ProjectReport, Storage};
use crate::utils::error::{PairError, Result};

/// Reads assignment records from storage, groups them and finds the longest pair per project.
pub struct AssignmentPipeline<S: Storage, C: ConfigProvider, K: Clock> {
    storage: S,
    config: C,
    clock: K,
}

impl<S: Storage, C: ConfigProvider, K: Clock> AssignmentPipeline<S, C, K> {
    pub fn new(storage: S, config: C, clock: K) -> Self {
        Self {
            storage,
            config,
            clock,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Clock> Pipeline for AssignmentPipeline<S, C, K> {
    async fn extract(&self) -> Result<Vec<AssignmentRecord>> {
        let path = self.config.input_path();
        tracing::debug!("Reading assignments from: {}", path);

        let bytes = self.storage.read_file(path).await?;
        let text = String::from_utf8(bytes)
            .map_err(|e| PairError::format(format!("{} is not valid UTF-8: {}", path, e)))?;

        let records = ingest::parse_records(&text, &self.clock)?;
        tracing::debug!("Parsed {} assignment records", records.len());
        Ok(records)
    }

    async fn transform(&self, records: Vec<AssignmentRecord>) -> Result<ProjectReport> {
        let groups = grouping::group_by_project(records);
        tracing::debug!(
            "Grouped {} records into {} projects",
            groups.record_count(),
            groups.len()
        );

        let spans = span::longest_pairs(&groups);
        for entry in &spans {
            tracing::debug!(
                "Project {}: employees {} and {} for {} days",
                entry.project_id,
                entry.span.employee_id_a,
                entry.span.employee_id_b,
                entry.span.max_days
            );
        }

        Ok(ProjectReport { groups, spans })
    }

    async fn load(&self, report: ProjectReport) -> Result<String> {
        Ok(report::render_report(&report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    struct MockStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &[u8]) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.to_vec());
            Self { files }
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.get(path).cloned().ok_or_else(|| {
                PairError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }
    }

    struct MockConfig {
        input_path: String,
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            &self.input_path
        }
    }

    fn pipeline(content: &[u8]) -> AssignmentPipeline<MockStorage, MockConfig, FixedClock> {
        AssignmentPipeline::new(
            MockStorage::with_file("employees.txt", content),
            MockConfig {
                input_path: "employees.txt".to_string(),
            },
            FixedClock(NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()),
        )
    }

    #[tokio::test]
    async fn test_extract_resolves_null_with_clock() {
        let records = pipeline(b"1, 10, 2020-01-01, NULL\n").extract().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].end_date(),
            NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()
        );
    }

    #[tokio::test]
    async fn test_extract_missing_file_is_io_error() {
        let pipeline = AssignmentPipeline::new(
            MockStorage {
                files: HashMap::new(),
            },
            MockConfig {
                input_path: "missing.txt".to_string(),
            },
            FixedClock(NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()),
        );
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, PairError::IoError(_)));
    }

    #[tokio::test]
    async fn test_extract_rejects_non_utf8() {
        let err = pipeline(&[0xff, 0xfe, 0x00]).extract().await.unwrap_err();
        assert!(matches!(err, PairError::FormatError { .. }));
    }

    #[tokio::test]
    async fn test_transform_groups_and_spans() {
        let pipeline = pipeline(
            b"1, 10, 2020-01-01, 2020-01-11\n2, 10, 2020-01-01, 2020-01-11\n3, 5, 2020-01-01, NULL\n",
        );
        let records = pipeline.extract().await.unwrap();
        let report = pipeline.transform(records).await.unwrap();

        assert_eq!(report.groups.len(), 2);
        assert_eq!(report.spans[0].project_id, 5);
        assert_eq!(report.spans[0].span.max_days, 0);
        assert_eq!(report.spans[1].project_id, 10);
        assert_eq!(report.spans[1].span.max_days, 10);

        let text = pipeline.load(report).await.unwrap();
        assert!(text.contains("Employees working on Project [5]:"));
        assert!(text.contains("Employees [1] and [2] have spent [10] days"));
    }
}
