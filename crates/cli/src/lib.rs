//! Shared pieces of the `mm` command line tool

pub mod app_config;
pub mod listing;
pub mod util;

pub use app_config::AppConfig;
pub use listing::Listing;
