//! Output module for crawl results
//!
//! This module handles:
//! - Rendering a [`ResultSet`](crate::state::ResultSet) as JSON
//! - Persisting results to disk and reading them back
//! - Crawl statistics for the human-readable summary

mod json;
pub mod stats;

pub use json::{load, persist, render_json, ResultDocument};
pub use stats::{format_statistics, print_statistics, CrawlStatistics};

use crate::OutputError;

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;
