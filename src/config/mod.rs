//! Configuration module for the crawler
//!
//! Settings come from three layers: built-in defaults, an optional TOML file,
//! and command-line flags. This module owns the first two plus validation.
//!
//! # Example
//!
//! ```no_run
//! use webscraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl.toml")).unwrap().to_crawl_config();
//! println!("Crawler will use max depth: {}", config.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CrawlConfig, CrawlerSection, FileConfig, OutputSection, TraversalOrder, UserAgentSection,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, MAX_CONCURRENCY};
