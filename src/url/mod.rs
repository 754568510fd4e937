//! URL handling module
//!
//! This module covers seed validation, link resolution (the LinkResolver),
//! the visited-set key, and origin extraction for robots.txt.

mod domain;
mod normalize;
mod resolve;

// Re-export main functions
pub use domain::{extract_origin, robots_url};
pub use normalize::{is_valid_url, normalize_url, parse_crawl_url};
pub use resolve::{resolve_link, resolve_links};
