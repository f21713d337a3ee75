//! Listing records read from JSON item files

use search::Searchable;
use serde::{Deserialize, Serialize};
use spread::Located;
use std::collections::BTreeMap;

/// A marketplace listing, task or service as supplied by the API layer
///
/// Unknown fields are kept in `extra` and written back out untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Located for Listing {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Searchable for Listing {
    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
