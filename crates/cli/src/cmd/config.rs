//! Configuration inspection command
//!
//! Shows the effective configuration, validates files and prints an
//! example.

use anyhow::Result;
use cli_lib::{app_config, AppConfig};
use owo_colors::OwoColorize;
use std::path::Path;

/// Show the effective configuration
pub async fn run_show(config_path: Option<&Path>) -> Result<()> {
    let config = AppConfig::load_or_default(config_path)?;

    println!("{}", "Configuration".bold());
    match config_path {
        Some(path) => println!("{}: {}\n", "Location".dimmed(), path.display().dimmed()),
        None => println!("{}\n", "(built-in defaults)".dimmed()),
    }

    println!("{}", "[spread]".yellow());
    println!(
        "  {} = {} {}",
        "offset_degrees".cyan(),
        config.spread.offset_degrees,
        format!("(~{:.0}m)", config.spread.offset_degrees * 111_320.0).dimmed()
    );
    println!("  {} = {}", "precision".cyan(), config.spread.precision);

    println!("\n{}", "[search]".yellow());
    println!("  {} = {}", "debounce_ms".cyan(), config.search.debounce_ms);
    println!(
        "  {} = {}",
        "default_radius_km".cyan(),
        config.search.default_radius_km
    );

    println!("\n{}", "Valid Ranges:".bold());
    println!("  offset_degrees: (0, 1]");
    println!("  precision: 0-9");
    println!("  debounce_ms: 0-10,000");
    println!("  default_radius_km: (0, 20,000]");

    Ok(())
}

/// Validate a configuration file
pub async fn run_check(path: &Path) -> Result<()> {
    AppConfig::load(path)?;
    println!("{} {} is valid", "✓".green(), path.display());
    Ok(())
}

/// Show example configuration
pub async fn run_example() -> Result<()> {
    print!("{}", app_config::example_config());
    Ok(())
}
