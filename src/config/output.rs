//! Output configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Tracing filter directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Echo the parsed alternatives before the results
    #[serde(default)]
    pub show_table: bool,

    /// Print the Savage regret matrix
    #[serde(default = "default_show_regret_matrix")]
    pub show_regret_matrix: bool,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() || EnvFilter::try_new(&self.log_level).is_err() {
            return Err(ValidationError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: OutputFormat::default(),
            show_table: false,
            show_regret_matrix: default_show_regret_matrix(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_show_regret_matrix() -> bool {
    true
}
