//! Spreader configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default circle radius for stacked markers (degrees, ~80-90m)
pub const DEFAULT_OFFSET_DEGREES: f64 = 0.0008;

/// Default number of decimals kept in coordinate keys (~11m)
pub const DEFAULT_PRECISION: u32 = 4;

/// Highest precision accepted; beyond this the scaled key overflows usefulness
pub const MAX_PRECISION: u32 = 9;

/// Placement parameters
///
/// Loaded from the `[spread]` table of the application config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadConfig {
    /// Radius of the circle stacked markers are moved onto (degrees)
    ///
    /// Fixed regardless of group size, so spacing shrinks as groups grow.
    pub offset_degrees: f64,

    /// Decimal places kept when bucketing coordinates
    pub precision: u32,
}

impl Default for SpreadConfig {
    fn default() -> Self {
        Self {
            offset_degrees: DEFAULT_OFFSET_DEGREES,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SpreadConfig {
    /// Check that all values are within their valid ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let offset = self.offset_degrees;
        if !offset.is_finite() || offset <= 0.0 || offset > 1.0 {
            return Err(ConfigError::InvalidOffset(offset));
        }

        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision {
                got: self.precision,
                max: MAX_PRECISION,
            });
        }

        Ok(())
    }
}
