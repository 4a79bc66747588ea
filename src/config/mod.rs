//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_CRITERIA` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment is valid.
//!
//! # Example
//!
//! ```no_run
//! use decision_criteria::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Hurwitz steps: {}", config.hurwitz.steps);
//! ```

mod error;
mod hurwitz;
mod output;

pub use error::{ConfigError, ValidationError};
pub use hurwitz::{HurwitzConfig, MAX_HURWITZ_STEPS, MAX_PACING_MS};
pub use output::{OutputConfig, OutputFormat};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration (format, optional sections, log filter)
    #[serde(default)]
    pub output: OutputConfig,

    /// Hurwitz sweep configuration (resolution, pacing, single degree)
    #[serde(default)]
    pub hurwitz: HurwitzConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_CRITERIA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_CRITERIA__OUTPUT__FORMAT=json` -> `output.format = json`
    /// - `DECISION_CRITERIA__HURWITZ__PACING_MS=0` -> `hurwitz.pacing_ms = 0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_CRITERIA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if a loaded value is out of range.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.output.validate()?;
        self.hurwitz.validate()?;
        Ok(())
    }
}
