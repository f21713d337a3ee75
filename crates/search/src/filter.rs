//! Discrete filter selections for listing screens

use serde::{Deserialize, Serialize};

/// Category value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Radius filter applied on a fresh screen (km)
pub const DEFAULT_RADIUS_KM: f64 = 25.0;

/// Category, radius and difficulty selections
///
/// Setters are synchronous and idempotent; derived flags are computed on
/// read, so they can never disagree with the selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    category: String,
    radius_km: Option<f64>,
    difficulty: Option<String>,
    default_radius_km: Option<f64>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(Some(DEFAULT_RADIUS_KM))
    }
}

impl FilterState {
    /// Fresh selections with the given default radius (`None` = any distance)
    pub fn new(default_radius_km: Option<f64>) -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            radius_km: default_radius_km,
            difficulty: None,
            default_radius_km,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn radius_km(&self) -> Option<f64> {
        self.radius_km
    }

    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    pub fn default_radius_km(&self) -> Option<f64> {
        self.default_radius_km
    }

    /// Select a category; `"all"` in any case removes the category filter
    pub fn select_category(&mut self, category: impl Into<String>) {
        let mut category = category.into();
        if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            category = ALL_CATEGORIES.to_string();
        }
        if self.category != category {
            self.category = category;
        }
    }

    /// Select a difficulty, or `None` for any
    pub fn select_difficulty(&mut self, difficulty: Option<&str>) {
        if self.difficulty.as_deref() != difficulty {
            self.difficulty = difficulty.map(str::to_owned);
        }
    }

    /// Select `difficulty`, or deselect it if it is already selected
    pub fn toggle_difficulty(&mut self, difficulty: &str) {
        if self.difficulty.as_deref() == Some(difficulty) {
            self.difficulty = None;
        } else {
            self.difficulty = Some(difficulty.to_owned());
        }
    }

    /// Set the search radius in kilometres (`None` = any distance)
    pub fn set_radius(&mut self, radius_km: Option<f64>) {
        self.radius_km = radius_km;
    }

    /// Reset radius and difficulty; the category is kept
    pub fn clear_filters(&mut self) {
        self.radius_km = self.default_radius_km;
        self.difficulty = None;
    }

    /// Reset every selection including the category
    pub fn reset_all(&mut self) {
        self.clear_filters();
        self.category = ALL_CATEGORIES.to_string();
    }

    /// Radius or difficulty differ from their defaults
    pub fn has_active_filters(&self) -> bool {
        self.radius_km != self.default_radius_km || self.difficulty.is_some()
    }

    /// A specific category is selected
    pub fn has_active_category(&self) -> bool {
        !self.category.eq_ignore_ascii_case(ALL_CATEGORIES)
    }
}
