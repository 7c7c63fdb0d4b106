pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use toml_config::LOG_LEVELS;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// Where the tool historically looked for its input.
pub const DEFAULT_INPUT_PATH: &str = "resource/employees.txt";

/// Effective settings for one run, after merging CLI flags and the optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: String,
    pub monitor: bool,
    pub log_level: Option<String>,
}

impl RunConfig {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            monitor: false,
            log_level: None,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH)
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input_path)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("log_level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "longest-pair")]
#[command(about = "Find the pair of employees who worked together longest on each project")]
pub struct CliConfig {
    /// Assignment file [default: resource/employees.txt]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges flags over the TOML file (if any) over the defaults.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        Ok(merge(self, &file))
    }
}

#[cfg(feature = "cli")]
fn merge(cli: &CliConfig, file: &TomlConfig) -> RunConfig {
    let input_path = cli
        .input
        .as_deref()
        .or(file.input_path())
        .unwrap_or(DEFAULT_INPUT_PATH)
        .to_string();

    RunConfig {
        input_path,
        monitor: cli.monitor || file.monitoring_enabled(),
        log_level: file.log_level().map(str::to_string),
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["longest-pair"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config, RunConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flag_overrides_file() {
        let file = TomlConfig::from_toml_str(
            "[source]\npath = \"from-file.txt\"\n[monitoring]\nenabled = true\nlog_level = \"warn\"\n",
        )
        .unwrap();

        let cli = CliConfig::parse_from(["longest-pair", "--input", "from-flag.txt"]);
        let config = merge(&cli, &file);
        assert_eq!(config.input_path, "from-flag.txt");
        assert!(config.monitor);
        assert_eq!(config.log_level.as_deref(), Some("warn"));

        let cli = CliConfig::parse_from(["longest-pair"]);
        assert_eq!(merge(&cli, &file).input_path, "from-file.txt");
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::parse_from(["longest-pair", "-c", "/definitely/not/here.toml"]);
        assert!(matches!(
            cli.resolve(),
            Err(crate::utils::error::PairError::IoError(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(RunConfig::new("").validate().is_err());
    }
}
