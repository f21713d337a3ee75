//! Spread stacked markers

use crate::OutputFormat;
use anyhow::{Context, Result};
use cli_lib::{util, AppConfig, Listing};
use owo_colors::OwoColorize;
use serde::Serialize;
use spread::{Placed, Spreader};
use std::path::Path;

/// One placed marker in JSON output
#[derive(Serialize)]
struct MarkerOut<'a> {
    id: &'a str,
    title: &'a str,
    latitude: f64,
    longitude: f64,
    display_latitude: f64,
    display_longitude: f64,
    group_size: usize,
}

impl<'a> From<&'a Placed<Listing>> for MarkerOut<'a> {
    fn from(placed: &'a Placed<Listing>) -> Self {
        let listing = placed.item();
        Self {
            id: &listing.id,
            title: &listing.title,
            latitude: listing.latitude,
            longitude: listing.longitude,
            display_latitude: placed.display_latitude(),
            display_longitude: placed.display_longitude(),
            group_size: placed.group_size(),
        }
    }
}

pub async fn run(items: &Path, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    // 1. Load configuration
    let config = AppConfig::load_or_default(config_path)?;
    let spreader = Spreader::new(config.spread).context("Invalid spread configuration")?;

    // 2. Load listings
    let listings = util::load_listings(items)?;

    // 3. Place markers
    let groups = spreader.groups(&listings);
    let stacked = groups.iter().filter(|g| g.len() > 1).count();
    let placed = spreader.spread(listings);

    // 4. Display output
    match format {
        OutputFormat::Json => {
            let out: Vec<MarkerOut<'_>> = placed.iter().map(MarkerOut::from).collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => print_table(&placed, groups.len(), stacked),
    }

    Ok(())
}

fn print_table(placed: &[Placed<Listing>], group_count: usize, stacked: usize) {
    println!("{}", "Map Markers".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for p in placed {
        let listing = p.item();
        let position = format!("{:.6}, {:.6}", p.display_latitude(), p.display_longitude());

        if p.is_offset() {
            println!(
                "{:<10} {:<28} {} {}",
                listing.id.yellow(),
                util::truncate(&listing.title, 28),
                position.cyan(),
                format!("(stack of {})", p.group_size()).dimmed()
            );
        } else {
            println!(
                "{:<10} {:<28} {}",
                listing.id.yellow(),
                util::truncate(&listing.title, 28),
                position
            );
        }
    }

    println!();
    println!(
        "{} markers, {} positions, {} stacked",
        placed.len(),
        group_count,
        stacked
    );
}
