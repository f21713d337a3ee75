//! Matching settled criteria against listings

use crate::filter::{FilterState, ALL_CATEGORIES};
use serde::{Deserialize, Serialize};
use spread::{Coordinate, Located};

/// Fields a listing exposes to search
pub trait Searchable {
    /// Title matched against the query
    fn title(&self) -> &str;

    /// Category key (compared case-insensitively)
    fn category(&self) -> &str;

    /// Difficulty key, if the listing has one (tasks do, goods don't)
    fn difficulty(&self) -> Option<&str> {
        None
    }

    /// Longer text also matched against the query
    fn description(&self) -> Option<&str> {
        None
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn category(&self) -> &str {
        (**self).category()
    }

    fn difficulty(&self) -> Option<&str> {
        (**self).difficulty()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }
}

/// Snapshot of a settled query plus filter selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Settled, trimmed query; empty matches everything
    pub query: String,
    /// Category key or `"all"`
    pub category: String,
    /// Required difficulty
    pub difficulty: Option<String>,
    /// Maximum distance from the origin in kilometres
    pub radius_km: Option<f64>,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            difficulty: None,
            radius_km: None,
        }
    }
}

impl Criteria {
    /// Combine a settled query with filter selections
    pub fn new(query: impl Into<String>, filters: &FilterState) -> Self {
        Self {
            query: query.into(),
            category: filters.category().to_string(),
            difficulty: filters.difficulty().map(str::to_owned),
            radius_km: filters.radius_km(),
        }
    }

    /// Check one item
    ///
    /// The radius is only applied when an origin is known.
    pub fn matches<T>(&self, item: &T, origin: Option<&Coordinate>) -> bool
    where
        T: Searchable + Located,
    {
        self.matches_query(item)
            && self.matches_category(item)
            && self.matches_difficulty(item)
            && self.within_radius(item, origin)
    }

    fn matches_query<T: Searchable>(&self, item: &T) -> bool {
        let needle = self.query.trim();
        if needle.is_empty() {
            return true;
        }

        let needle = needle.to_lowercase();
        item.title().to_lowercase().contains(&needle)
            || item
                .description()
                .map_or(false, |d| d.to_lowercase().contains(&needle))
    }

    fn matches_category<T: Searchable>(&self, item: &T) -> bool {
        self.category.eq_ignore_ascii_case(ALL_CATEGORIES)
            || item.category().eq_ignore_ascii_case(&self.category)
    }

    fn matches_difficulty<T: Searchable>(&self, item: &T) -> bool {
        match &self.difficulty {
            Some(wanted) => item
                .difficulty()
                .map_or(false, |d| d.eq_ignore_ascii_case(wanted)),
            None => true,
        }
    }

    fn within_radius<T: Located>(&self, item: &T, origin: Option<&Coordinate>) -> bool {
        match (self.radius_km, origin) {
            (Some(radius), Some(origin)) => origin.distance_km(&item.coordinate()) <= radius,
            _ => true,
        }
    }
}

/// Items matching `criteria`, in input order
pub fn filter_items<'a, T>(
    items: &'a [T],
    criteria: &Criteria,
    origin: Option<&Coordinate>,
) -> Vec<&'a T>
where
    T: Searchable + Located,
{
    items
        .iter()
        .filter(|item| criteria.matches(*item, origin))
        .collect()
}
