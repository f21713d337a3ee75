//! Per-screen search session
//!
//! Bundles the debounced query with the filter selections, as owned by a
//! listing or map screen from mount to unmount. Dropping the session
//! cancels any pending settle.

use crate::config::SearchConfig;
use crate::debounce::DebouncedQuery;
use crate::filter::FilterState;
use crate::matcher::Criteria;
use tokio::sync::watch;

/// Query and filters owned by one screen
#[derive(Debug)]
pub struct SearchSession {
    query: DebouncedQuery,
    filters: FilterState,
}

impl SearchSession {
    /// Start a session on the current Tokio runtime
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            query: DebouncedQuery::new(config.delay()),
            filters: FilterState::new(Some(config.default_radius_km)),
        }
    }

    pub fn query(&self) -> &DebouncedQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut DebouncedQuery {
        &mut self.query
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Update the raw query (see [`DebouncedQuery::set_query`])
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query.set_query(text);
    }

    /// Empty the query and cancel any pending settle
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Watch settled query values
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.query.subscribe()
    }

    /// Reset radius and difficulty
    pub fn clear_filters(&mut self) {
        self.filters.clear_filters();
    }

    /// Reset every filter including the category, and clear the query
    pub fn reset_all(&mut self) {
        self.filters.reset_all();
        self.query.clear();
    }

    /// Anything narrowing the results beyond defaults
    pub fn is_filtering(&self) -> bool {
        !self.query.debounced_query().is_empty()
            || self.filters.has_active_filters()
            || self.filters.has_active_category()
    }

    /// Criteria to run against listings, using the settled query
    pub fn criteria(&self) -> Criteria {
        Criteria::new(self.query.debounced_query(), &self.filters)
    }
}
