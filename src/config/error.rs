//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Hurwitz steps must be between 1 and {max}, got {actual}")]
    InvalidHurwitzSteps { max: u32, actual: u32 },

    #[error("Hurwitz pacing must not exceed {max}ms, got {actual}ms")]
    InvalidPacing { max: u64, actual: u64 },

    #[error("Optimism degree must be within [0, 1], got {0}")]
    InvalidOptimismDegree(f64),
}
