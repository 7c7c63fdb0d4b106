pub mod etl;
pub mod grouping;
pub mod ingest;
pub mod pipeline;
pub mod report;
pub mod span;

pub use crate::domain::model::{
    AssignmentRecord, ProjectGroups, ProjectReport, ProjectSpan, SpanResult,
};
pub use crate::domain::ports::{Clock, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
