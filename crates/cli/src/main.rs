//! Marketmap CLI - mm command

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd;

/// Marketmap - map marker placement and listing search
#[derive(Parser)]
#[command(name = "mm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for placed markers
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Spread stacked map markers and print display positions
    Spread {
        /// JSON file with an array of listings
        items: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Filter listings by query, category, difficulty and distance
    Filter {
        /// JSON file with an array of listings
        items: PathBuf,
        /// Search text (matched against title and description)
        #[arg(short, long)]
        query: Option<String>,
        /// Category key ("all" for any)
        #[arg(short, long)]
        category: Option<String>,
        /// Difficulty key
        #[arg(short, long)]
        difficulty: Option<String>,
        /// Radius in km (default from config)
        #[arg(short, long, conflicts_with = "any_distance")]
        radius: Option<f64>,
        /// Disable the radius filter
        #[arg(long)]
        any_distance: bool,
        /// Origin for the radius filter, as LAT,LNG
        #[arg(long)]
        near: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Inspect configuration
    Config {
        /// Print an example configuration file
        #[arg(long, conflicts_with = "check")]
        example: bool,
        /// Validate a configuration file
        #[arg(long)]
        check: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Spread { items, format } => cmd::spread::run(&items, config_path, format).await,
        Commands::Filter {
            items,
            query,
            category,
            difficulty,
            radius,
            any_distance,
            near,
            format,
        } => {
            let args = cmd::filter::FilterArgs {
                query,
                category,
                difficulty,
                radius,
                any_distance,
                near,
                format,
            };
            cmd::filter::run(&items, config_path, args).await
        }
        Commands::Config { example, check } => {
            if example {
                cmd::config::run_example().await
            } else if let Some(path) = check {
                cmd::config::run_check(&path).await
            } else {
                cmd::config::run_show(config_path).await
            }
        }
    }
}
