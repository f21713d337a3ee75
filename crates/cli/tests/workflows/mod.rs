//! Workflow integration tests

pub mod filter_listings;
pub mod spread_markers;
