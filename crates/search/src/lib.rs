//! Search and filter view state for Marketmap screens
//!
//! This crate provides:
//! - Debounced search query (raw value + settled value, cancellable timer)
//! - Discrete filter selections (category, radius, difficulty)
//! - Search sessions combining both, as owned by a single screen
//! - Matching of settled criteria against listings
//!
//! State is owned by the view that creates it. Nothing here is shared
//! between instances.

pub mod config;
pub mod debounce;
pub mod filter;
pub mod matcher;
pub mod session;

// Re-exports
pub use config::{ConfigError, SearchConfig};
pub use debounce::{DebouncedQuery, DEFAULT_DEBOUNCE};
pub use filter::{FilterState, ALL_CATEGORIES, DEFAULT_RADIUS_KM};
pub use matcher::{filter_items, Criteria, Searchable};
pub use session::SearchSession;
