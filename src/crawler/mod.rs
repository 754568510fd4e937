//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the [`Fetcher`] seam
//! - HTML parsing into page text and raw anchors
//! - The depth-first or breadth-first frontier
//! - Overall crawl coordination in [`CrawlEngine`]

mod engine;
mod fetcher;
mod frontier;
mod parser;

pub use engine::{CrawlEngine, CrawlOutcome};
pub use fetcher::{
    build_http_client, fetch_url, FetchedPage, Fetcher, HttpFetcher, MAX_REDIRECTS,
};
pub use frontier::{Frontier, FrontierEntry};
pub use parser::{parse_html, ParsedPage};

use crate::config::CrawlConfig;

/// Runs a complete crawl with the default HTTP engine
///
/// This is the one-call entry point. It validates `config`, builds the
/// reqwest client, crawls from `seed` and returns the outcome.
///
/// # Arguments
///
/// * `config` - The crawl configuration
/// * `seed` - Starting URL; an invalid one yields an empty outcome
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Crawl ran to completion
/// * `Err(ScraperError)` - Invalid configuration or HTTP client setup failure
pub async fn crawl(config: CrawlConfig, seed: &str) -> crate::Result<CrawlOutcome> {
    let engine = CrawlEngine::from_config(config)?;
    Ok(engine.crawl(seed).await)
}
