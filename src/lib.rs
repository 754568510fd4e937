//! WebScraper: a bounded recursive crawler that harvests contact data
//!
//! This crate fetches pages starting from a seed URL, pulls category-tagged
//! strings (emails, phone numbers, social handles, dates, addresses, prices)
//! out of each page, and follows discovered links up to a depth and page
//! budget.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod robots;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for crawl operations
///
/// Per-page problems never surface here; they are logged and the crawl moves
/// on. What remains are setup failures and losing the results on disk.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Failure to fetch a single page
///
/// These are never fatal to a crawl: the page contributes nothing and the
/// engine moves to the next frontier entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("response body is not valid UTF-8")]
    InvalidEncoding,
}

/// Errors raised while persisting or reloading results
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, ScraperError>;

// Re-export commonly used types
pub use config::{CrawlConfig, TraversalOrder};
pub use crawler::{CrawlEngine, CrawlOutcome, Fetcher, HttpFetcher};
pub use extract::{Extractor, PatternExtractor};
pub use state::{Category, PageState, ResultSet, VisitedSet};
pub use url::{is_valid_url, normalize_url, resolve_links};
