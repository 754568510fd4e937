//! Per-origin robots.txt cache
//!
//! Entries expire after 24 hours. Within one crawl that rarely matters, but a
//! long-running embedding process reusing an engine should pick up changes.

use crate::crawler::Fetcher;
use crate::robots::ParsedRobots;
use crate::url::{extract_origin, robots_url};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use url::Url;

/// Rules for one origin plus the time they were fetched
#[derive(Debug, Clone)]
pub struct CachedRobots {
    /// The parsed robots.txt content
    pub content: ParsedRobots,

    /// When the robots.txt was fetched
    pub fetched_at: DateTime<Utc>,
}

impl CachedRobots {
    pub fn new(content: ParsedRobots) -> Self {
        Self {
            content,
            fetched_at: Utc::now(),
        }
    }

    /// Checks if the cached robots.txt is older than 24 hours
    pub fn is_stale(&self) -> bool {
        self.age() > Duration::hours(24)
    }

    /// Time elapsed since the rules were fetched
    pub fn age(&self) -> Duration {
        Utc::now() - self.fetched_at
    }
}

/// Lazily populated robots.txt rules keyed by origin
#[derive(Debug)]
pub struct RobotsCache {
    user_agent: String,
    entries: HashMap<String, CachedRobots>,
}

impl RobotsCache {
    /// Creates an empty cache that evaluates rules for `user_agent`
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            entries: HashMap::new(),
        }
    }

    /// Number of origins with cached rules
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seeds the cache for an origin without fetching
    pub fn insert(&mut self, origin: impl Into<String>, robots: ParsedRobots) {
        self.entries.insert(origin.into(), CachedRobots::new(robots));
    }

    /// Checks `url` against its origin's robots.txt
    ///
    /// The first check for an origin (or one whose entry went stale) fetches
    /// `/robots.txt` through `fetcher`. Any fetch failure, including a 404,
    /// is treated as "no rules".
    pub async fn allowed<F: Fetcher>(&mut self, url: &Url, fetcher: &F) -> bool {
        let Some(origin) = extract_origin(url) else {
            return true;
        };

        let fresh = self
            .entries
            .get(&origin)
            .is_some_and(|cached| !cached.is_stale());

        if !fresh {
            let robots = fetch_robots(url, fetcher).await;
            self.entries.insert(origin.clone(), CachedRobots::new(robots));
        }

        self.entries
            .get(&origin)
            .map_or(true, |cached| cached.content.is_allowed(url, &self.user_agent))
    }
}

/// Fetches and parses robots.txt for the origin of `url`
async fn fetch_robots<F: Fetcher>(url: &Url, fetcher: &F) -> ParsedRobots {
    let Some(robots_url) = robots_url(url) else {
        return ParsedRobots::allow_all();
    };

    tracing::debug!("Fetching {}", robots_url);
    match fetcher.fetch(&robots_url).await {
        Ok(page) => ParsedRobots::from_content(&page.content),
        Err(e) => {
            tracing::debug!("No usable robots.txt at {}: {}", robots_url, e);
            ParsedRobots::allow_all()
        }
    }
}
