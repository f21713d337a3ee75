//! Application configuration file
//!
//! A single TOML file with one table per crate:
//!
//! ```toml
//! [spread]
//! offset_degrees = 0.0008
//! precision = 4
//!
//! [search]
//! debounce_ms = 300
//! default_radius_km = 25.0
//! ```
//!
//! Missing tables and keys fall back to defaults.

use anyhow::{Context, Result};
use search::SearchConfig;
use serde::{Deserialize, Serialize};
use spread::SpreadConfig;
use std::path::Path;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Marker placement
    pub spread: SpreadConfig,
    /// Search and filters
    pub search: SearchConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check every section
    pub fn validate(&self) -> Result<()> {
        self.spread.validate().context("Invalid [spread] section")?;
        self.search.validate().context("Invalid [search] section")?;
        Ok(())
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Example configuration with every key and its default
pub fn example_config() -> &'static str {
    r#"# Marketmap configuration

[spread]
# Radius of the circle stacked markers are moved onto, in degrees (0, 1]
# 0.0008 is roughly 80-90m
offset_degrees = 0.0008
# Decimal places kept when bucketing coordinates (0-9); 4 is ~11m
precision = 4

[search]
# Settle delay for typed queries in milliseconds (0-10000)
debounce_ms = 300
# Radius filter on a fresh screen, in kilometres (0, 20000]
default_radius_km = 25.0
"#
}
