#[cfg(feature = "cli")]
pub mod cli;
pub mod seeds;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-etl")]
#[command(about = "Scrapes university catalog pages into a two-sheet xlsx workbook")]
pub struct CliConfig {
    /// TOML file replacing the embedded institution list
    #[arg(long)]
    pub seed_file: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Per-request socket timeout
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    /// Pause between program page requests
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,

    #[arg(long, help = "Log system resource usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn request_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        if let Some(seed_file) = &self.seed_file {
            validation::validate_path("seed_file", seed_file)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            seed_file: None,
            output_path: "./output".to_string(),
            timeout_secs: 10,
            delay_ms: 500,
            monitor: false,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = base_config();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_output_path_is_rejected() {
        let mut config = base_config();
        config.output_path = String::new();
        assert!(config.validate().is_err());
    }
}
