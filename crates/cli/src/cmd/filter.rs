//! Filter listings the way a listing screen does

use crate::OutputFormat;
use anyhow::Result;
use cli_lib::{util, AppConfig, Listing};
use owo_colors::OwoColorize;
use search::{filter_items, SearchSession};
use spread::{Coordinate, Located};
use std::path::Path;

/// Selections passed on the command line
pub struct FilterArgs {
    pub query: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub radius: Option<f64>,
    pub any_distance: bool,
    pub near: Option<String>,
    pub format: OutputFormat,
}

pub async fn run(items: &Path, config_path: Option<&Path>, args: FilterArgs) -> Result<()> {
    // 1. Load configuration and listings
    let config = AppConfig::load_or_default(config_path)?;
    let listings = util::load_listings(items)?;

    let origin = args
        .near
        .as_deref()
        .map(util::parse_coordinate)
        .transpose()?;

    if let Some(radius) = args.radius {
        if !radius.is_finite() || radius <= 0.0 {
            anyhow::bail!("Radius must be a positive number of kilometres, got {}", radius);
        }
    }

    // 2. Drive a session like a screen would; the query is submitted, not typed
    let mut session = SearchSession::new(&config.search);
    if let Some(query) = &args.query {
        session.set_query(query.as_str());
        session.query_mut().flush();
    }

    let filters = session.filters_mut();
    if let Some(category) = &args.category {
        filters.select_category(category.as_str());
    }
    filters.select_difficulty(args.difficulty.as_deref());
    if args.any_distance {
        filters.set_radius(None);
    } else if let Some(radius) = args.radius {
        filters.set_radius(Some(radius));
    }

    let criteria = session.criteria();
    tracing::debug!(?criteria, ?origin, "Filtering listings");

    if origin.is_none() && criteria.radius_km.is_some() {
        tracing::info!("No --near origin given, radius filter not applied");
    }

    // 3. Match
    let found = filter_items(&listings, &criteria, origin.as_ref());

    // 4. Display output
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
        OutputFormat::Table => print_table(&found, listings.len(), origin.as_ref()),
    }

    Ok(())
}

fn print_table(found: &[&Listing], total: usize, origin: Option<&Coordinate>) {
    println!("{}", "Matching Listings".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for listing in found {
        let distance = origin
            .map(|o| util::format_distance(o.distance_km(&listing.coordinate())))
            .unwrap_or_default();

        println!(
            "{:<10} {:<28} {:<12} {:<8} {}",
            listing.id.yellow(),
            util::truncate(&listing.title, 28),
            listing.category.cyan(),
            listing.difficulty.as_deref().unwrap_or("-"),
            distance.dimmed()
        );
    }

    println!();
    println!("{} of {} listings match", found.len(), total);
}
