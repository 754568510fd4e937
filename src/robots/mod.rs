//! robots.txt support
//!
//! Consulted only when a crawl is configured to respect robots.txt. Rules are
//! fetched through the crawl's own [`Fetcher`](crate::crawler::Fetcher) and
//! cached per origin.

mod cache;
mod parser;

pub use cache::{CachedRobots, RobotsCache};
pub use parser::ParsedRobots;
