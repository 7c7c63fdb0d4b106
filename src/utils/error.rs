use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PairError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Format error: {message}")]
    FormatError { message: String },

    #[error("Invalid integer '{token}': {source}")]
    InvalidInteger {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid date '{token}': {reason}")]
    InvalidDate { token: String, reason: String },

    #[error("Employee {employee_id} on project {project_id} ends ({end}) before it starts ({start})")]
    InvalidInterval {
        employee_id: i32,
        project_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Format,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PairError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::FormatError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PairError::IoError(_) => ErrorCategory::Io,
            PairError::FormatError { .. }
            | PairError::InvalidInteger { .. }
            | PairError::InvalidDate { .. }
            | PairError::InvalidInterval { .. } => ErrorCategory::Format,
            PairError::ConfigError { .. }
            | PairError::ConfigValidationError { .. }
            | PairError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Nothing here is recoverable mid-run, so the lowest severity is `High`.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Format | ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PairError::IoError(_) => "Check that the input file exists and is readable",
            PairError::FormatError { .. } => {
                "Each record needs four fields separated by \", \": EmpID, ProjectID, DateFrom, DateTo"
            }
            PairError::InvalidInteger { .. } => "Employee and project ids must be whole numbers",
            PairError::InvalidDate { .. } => {
                "Dates must be written as YYYY-MM-DD, or NULL for an open end date"
            }
            PairError::InvalidInterval { .. } => {
                "Swap DateFrom and DateTo so the assignment starts before it ends"
            }
            PairError::ConfigError { .. } | PairError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            PairError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read the input: {}", self),
            ErrorCategory::Format => format!("The input file is malformed: {}", self),
            ErrorCategory::Configuration => format!("The configuration is invalid: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PairError>;
