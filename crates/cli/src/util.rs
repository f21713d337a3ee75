//! Shared utilities for CLI commands

use crate::listing::Listing;
use anyhow::{Context, Result};
use spread::Coordinate;
use std::path::Path;

/// Read a JSON array of listings
pub fn load_listings(path: &Path) -> Result<Vec<Listing>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read items file {}", path.display()))?;

    let listings: Vec<Listing> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse items file {}", path.display()))?;

    for listing in &listings {
        let at = Coordinate::new(listing.latitude, listing.longitude);
        if !at.is_valid() {
            anyhow::bail!(
                "Listing '{}' has invalid coordinates ({}, {})",
                listing.id,
                listing.latitude,
                listing.longitude
            );
        }
    }

    tracing::debug!(count = listings.len(), path = %path.display(), "Loaded listings");
    Ok(listings)
}

/// Parse "LAT,LNG"
pub fn parse_coordinate(text: &str) -> Result<Coordinate> {
    let (lat, lng) = text
        .split_once(',')
        .with_context(|| format!("Expected LAT,LNG but got '{}'", text))?;

    let latitude: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("Invalid latitude '{}'", lat.trim()))?;
    let longitude: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("Invalid longitude '{}'", lng.trim()))?;

    let coordinate = Coordinate::new(latitude, longitude);
    if !coordinate.is_valid() {
        anyhow::bail!("Coordinate out of range: {}", text);
    }

    Ok(coordinate)
}

/// Format a distance in human-readable form
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else if km < 10.0 {
        format!("{:.1} km", km)
    } else {
        format!("{:.0} km", km)
    }
}

/// Shorten text to `max` characters with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
