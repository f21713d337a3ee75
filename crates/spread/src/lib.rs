//! Coincident map marker spreading for Marketmap
//!
//! This crate provides:
//! - Geographic coordinates and haversine distance
//! - Coordinate keys (rounded lat/lng buckets, ~11m at 4 decimals)
//! - Circular de-overlap placement for markers sharing a bucket
//!
//! Placement never mutates the input. Each item is wrapped in a [`Placed`]
//! carrying the derived display position.
//!
//! # Example
//!
//! ```
//! use spread::{spread, Coordinate};
//!
//! let pins = vec![
//!     Coordinate::new(56.9496, 24.1052),
//!     Coordinate::new(56.94961, 24.10521),
//!     Coordinate::new(57.0, 24.0),
//! ];
//!
//! let placed = spread(pins);
//! assert_eq!(placed.len(), 3);
//! assert!(placed[0].is_offset());
//! assert!(!placed[2].is_offset());
//! ```

pub mod config;
pub mod coordinate;
pub mod error;
pub mod placement;

// Re-exports
pub use config::SpreadConfig;
pub use coordinate::{haversine_distance, Coordinate, CoordinateKey, Located, EARTH_RADIUS_KM};
pub use error::ConfigError;
pub use placement::{respread, spread, spread_with, CoordinateGroup, Placed, Spreader};
