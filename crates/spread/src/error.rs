//! Configuration errors

use thiserror::Error;

/// Invalid spreader configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Offset radius is not a finite value in (0, 1] degrees
    #[error("offset_degrees must be within (0, 1], got {0}")]
    InvalidOffset(f64),

    /// Rounding precision is out of range
    #[error("precision must be between 0 and {max}, got {got}")]
    InvalidPrecision { got: u32, max: u32 },
}
