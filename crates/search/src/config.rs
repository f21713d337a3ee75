//! Search configuration

use crate::filter::DEFAULT_RADIUS_KM;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Longest accepted settle delay
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Largest accepted default radius (roughly half the Earth's circumference)
pub const MAX_RADIUS_KM: f64 = 20_000.0;

/// Invalid search configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("debounce_ms must be at most {max}, got {got}")]
    InvalidDelay { got: u64, max: u64 },

    #[error("default_radius_km must be within (0, {max}], got {got}")]
    InvalidRadius { got: f64, max: f64 },
}

/// Search parameters
///
/// Loaded from the `[search]` table of the application config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Settle delay for typed queries in milliseconds (default: 300)
    pub debounce_ms: u64,

    /// Radius filter applied on a fresh screen, in kilometres (default: 25)
    pub default_radius_km: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            default_radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

impl SearchConfig {
    /// Settle delay as a duration
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Check that all values are within their valid ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::InvalidDelay {
                got: self.debounce_ms,
                max: MAX_DEBOUNCE_MS,
            });
        }

        let radius = self.default_radius_km;
        if !radius.is_finite() || radius <= 0.0 || radius > MAX_RADIUS_KM {
            return Err(ConfigError::InvalidRadius {
                got: radius,
                max: MAX_RADIUS_KM,
            });
        }

        Ok(())
    }
}
