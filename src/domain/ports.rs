use crate::domain::model::{AssignmentRecord, ProjectReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
}

/// Source of "today" for open-ended (`NULL`) assignments.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<AssignmentRecord>>;
    async fn transform(&self, records: Vec<AssignmentRecord>) -> Result<ProjectReport>;
    async fn load(&self, report: ProjectReport) -> Result<String>;
}
