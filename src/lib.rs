pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, RunConfig};

pub use core::{etl::EtlEngine, pipeline::AssignmentPipeline};
pub use domain::clock::{FixedClock, SystemClock};
pub use domain::model::{AssignmentRecord, ProjectGroups, ProjectReport, ProjectSpan, SpanResult};
pub use utils::error::{PairError, Result};
