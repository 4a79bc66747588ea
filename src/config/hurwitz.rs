//! Hurwitz sweep configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::criteria::DEFAULT_HURWITZ_STEPS;

/// Largest sweep resolution accepted.
pub const MAX_HURWITZ_STEPS: u32 = 1000;

/// Longest pause between printed rows.
pub const MAX_PACING_MS: u64 = 1000;

/// Hurwitz sweep configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HurwitzConfig {
    /// Number of optimism degrees in [0, 1)
    #[serde(default = "default_steps")]
    pub steps: u32,

    /// Pause between printed sweep rows, in milliseconds (0 disables)
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,

    /// Degree at which to also pick a single Hurwitz winner
    pub degree: Option<f64>,
}

impl HurwitzConfig {
    /// Row pacing as a duration
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// Validate Hurwitz configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.steps == 0 || self.steps > MAX_HURWITZ_STEPS {
            return Err(ValidationError::InvalidHurwitzSteps {
                max: MAX_HURWITZ_STEPS,
                actual: self.steps,
            });
        }
        if self.pacing_ms > MAX_PACING_MS {
            return Err(ValidationError::InvalidPacing {
                max: MAX_PACING_MS,
                actual: self.pacing_ms,
            });
        }
        if let Some(degree) = self.degree {
            if !(0.0..=1.0).contains(&degree) {
                return Err(ValidationError::InvalidOptimismDegree(degree));
            }
        }
        Ok(())
    }
}

impl Default for HurwitzConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            pacing_ms: default_pacing_ms(),
            degree: None,
        }
    }
}

fn default_steps() -> u32 {
    DEFAULT_HURWITZ_STEPS
}

fn default_pacing_ms() -> u64 {
    5
}
