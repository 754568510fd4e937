//! Per-crawl statistics
//!
//! Collected by the engine as it resolves each frontier entry and printed to
//! stderr by the CLI in verbose mode.

use crate::state::{Category, PageState, ResultSet};
use std::collections::HashMap;
use std::fmt::Write;
use std::time::Duration;

/// Counters describing how one crawl went
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStatistics {
    /// Number of frontier entries that ended in each state
    pub pages_by_state: HashMap<PageState, u64>,

    /// Resolved links seen across all fetched pages, duplicates included
    pub links_discovered: u64,

    /// Wall-clock duration of the crawl
    pub elapsed: Duration,
}

impl CrawlStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one dequeued entry
    pub fn record(&mut self, state: PageState) {
        *self.pages_by_state.entry(state).or_insert(0) += 1;
    }

    /// Count for a single state
    pub fn count(&self, state: PageState) -> u64 {
        self.pages_by_state.get(&state).copied().unwrap_or(0)
    }

    /// Pages for which a fetch was issued, successful or not
    pub fn pages_attempted(&self) -> u64 {
        self.pages_by_state
            .iter()
            .filter(|(state, _)| state.is_fetch())
            .map(|(_, count)| count)
            .sum()
    }

    pub fn pages_fetched(&self) -> u64 {
        self.count(PageState::Fetched)
    }

    pub fn pages_failed(&self) -> u64 {
        self.count(PageState::Failed)
    }

    /// Entries dropped by a guard without a fetch
    pub fn pages_skipped(&self) -> u64 {
        self.pages_by_state
            .iter()
            .filter(|(state, _)| state.is_skipped())
            .map(|(_, count)| count)
            .sum()
    }

    /// Fetch attempts per second over the whole crawl
    pub fn pages_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.pages_attempted() as f64 / secs
        } else {
            0.0
        }
    }
}

/// Formats statistics and per-category result counts as plain text
pub fn format_statistics(stats: &CrawlStatistics, results: &ResultSet) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Crawl Statistics ===");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Pages fetched: {} ({} failed)",
        stats.pages_fetched(),
        stats.pages_failed()
    );
    let _ = writeln!(out, "Links discovered: {}", stats.links_discovered);
    let _ = writeln!(
        out,
        "Elapsed: {:.2}s ({:.2} pages/sec)",
        stats.elapsed.as_secs_f64(),
        stats.pages_per_second()
    );

    if stats.pages_skipped() > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skipped:");
        for state in PageState::all_states().into_iter().filter(PageState::is_skipped) {
            let count = stats.count(state);
            if count > 0 {
                let _ = writeln!(out, "  {}: {}", state, count);
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Results:");
    for category in Category::ALL {
        let _ = writeln!(out, "  {}: {}", category, results.count(category));
    }

    out
}

/// Prints statistics to stderr so stdout stays pure JSON
pub fn print_statistics(stats: &CrawlStatistics, results: &ResultSet) {
    eprint!("{}", format_statistics(stats, results));
}
