//! Crawl engine - main crawl orchestration logic
//!
//! The engine owns all per-crawl state (visited set, frontier, results,
//! robots cache) in a single coordinator loop. Worker tasks only fetch,
//! parse, extract and resolve links, then hand a report back. Every
//! check-and-mark and every budget decision therefore happens in one place,
//! whatever the concurrency setting.
//!
//! Guards run on dequeue in a fixed order:
//!
//! 1. already visited
//! 2. depth at or beyond the limit
//! 3. page budget spent
//! 4. robots.txt denial (only when enabled)

use crate::config::{validate, CrawlConfig};
use crate::crawler::fetcher::{FetchedPage, Fetcher, HttpFetcher};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::parser::parse_html;
use crate::extract::{Extractor, PatternExtractor};
use crate::output::CrawlStatistics;
use crate::robots::RobotsCache;
use crate::state::{Category, PageState, ResultSet, VisitedSet};
use crate::url::{normalize_url, parse_crawl_url, resolve_links};
use crate::{FetchError, ScraperError};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use url::Url;

/// Number of completed pages between progress log lines
const PROGRESS_INTERVAL: u64 = 10;

/// What a crawl produced
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    /// Everything extracted, plus every discovered link under `urls`
    pub results: ResultSet,

    /// Per-state counters and timing
    pub stats: CrawlStatistics,

    /// True if the crawl was stopped by its cancellation token
    pub cancelled: bool,
}

/// Bounded recursive crawler
///
/// Generic over where pages come from and how they are mined, so tests can
/// run a crawl entirely in memory.
pub struct CrawlEngine<F = HttpFetcher, E = PatternExtractor> {
    config: Arc<CrawlConfig>,
    fetcher: Arc<F>,
    extractor: Arc<E>,
}

impl CrawlEngine<HttpFetcher, PatternExtractor> {
    /// Builds an engine with the reqwest fetcher and the pattern extractor
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlEngine)` - Configuration is valid and the HTTP client built
    /// * `Err(ScraperError)` - Invalid configuration or client setup failure
    ///
    /// # Example
    ///
    /// ```no_run
    /// use webscraper::{CrawlConfig, CrawlEngine};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let engine = CrawlEngine::from_config(CrawlConfig::default())?;
    /// let outcome = engine.crawl("https://example.com/").await;
    /// println!("{} emails", outcome.results.count(webscraper::Category::Emails));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(config: CrawlConfig) -> Result<Self, ScraperError> {
        validate(&config)?;
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::new(config, fetcher, PatternExtractor))
    }
}

impl<F, E> CrawlEngine<F, E>
where
    F: Fetcher,
    E: Extractor + 'static,
{
    /// Creates an engine from explicit parts
    ///
    /// The configuration is taken as is; call
    /// [`validate`](crate::config::validate) first if it comes from users.
    pub fn new(config: CrawlConfig, fetcher: F, extractor: E) -> Self {
        Self {
            config: Arc::new(config),
            fetcher: Arc::new(fetcher),
            extractor: Arc::new(extractor),
        }
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Crawls from `seed` until the frontier is exhausted
    ///
    /// Never fails: an invalid seed or a seed that cannot be fetched simply
    /// yields an empty result set.
    pub async fn crawl(&self, seed: &str) -> CrawlOutcome {
        self.crawl_with_cancellation(seed, CancellationToken::new())
            .await
    }

    /// Crawls from `seed`, stopping early when `cancel` fires
    ///
    /// On cancellation no further entries are dequeued, in-flight fetches
    /// are aborted, and whatever was accumulated so far is returned.
    pub async fn crawl_with_cancellation(
        &self,
        seed: &str,
        cancel: CancellationToken,
    ) -> CrawlOutcome {
        let span = tracing::info_span!("crawl", seed = %seed);
        self.run(seed, cancel).instrument(span).await
    }

    async fn run(&self, seed: &str, cancel: CancellationToken) -> CrawlOutcome {
        let mut state = CrawlState::new(&self.config);

        let seed_url = match parse_crawl_url(seed) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Invalid seed URL {}: {}", seed, e);
                return state.finish(false);
            }
        };

        tracing::info!(
            "Starting crawl (max depth {}, max pages {}, concurrency {})",
            self.config.max_depth,
            self.config.max_pages,
            self.config.concurrency
        );
        state.frontier.push(FrontierEntry::new(seed_url, 0));

        let mut workers: JoinSet<PageReport> = JoinSet::new();
        let mut cancelled = false;

        'crawl: loop {
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            // Fill free worker slots from the frontier
            while workers.len() < self.config.concurrency {
                let Some(entry) = state.frontier.pop() else {
                    break;
                };

                let admitted = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        cancelled = true;
                        break 'crawl;
                    }
                    admitted = self.admit(&entry, &mut state) => admitted,
                };

                match admitted {
                    Ok(()) => {
                        tracing::debug!("Fetching {} (depth {})", entry.url, entry.depth);
                        workers.spawn(visit_page(
                            Arc::clone(&self.fetcher),
                            Arc::clone(&self.extractor),
                            entry,
                        ));
                    }
                    Err(skipped) => state.stats.record(skipped),
                }
            }

            if workers.is_empty() {
                tracing::debug!("Frontier is empty, crawl complete");
                break;
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    cancelled = true;
                    break;
                }
                joined = workers.join_next() => match joined {
                    Some(Ok(report)) => self.absorb(report, &mut state),
                    Some(Err(e)) => tracing::error!("Page worker failed: {}", e),
                    None => {}
                },
            }
        }

        if cancelled {
            tracing::info!("Crawl cancelled, aborting {} in-flight fetches", workers.len());
            workers.shutdown().await;
        }

        let outcome = state.finish(cancelled);
        tracing::info!(
            "Crawl finished: {} pages fetched, {} failed, {} results in {:?}",
            outcome.stats.pages_fetched(),
            outcome.stats.pages_failed(),
            outcome.results.total(),
            outcome.stats.elapsed
        );
        outcome
    }

    /// Runs the dequeue guards and marks the URL visited if they all pass
    async fn admit(&self, entry: &FrontierEntry, state: &mut CrawlState) -> Result<(), PageState> {
        let key = normalize_url(&entry.url);

        if state.visited.contains(&key) {
            tracing::trace!("Skipping {}: already visited", entry.url);
            return Err(PageState::AlreadyVisited);
        }

        if entry.depth >= self.config.depth_limit() {
            tracing::debug!("Skipping {}: depth {} exceeds limit", entry.url, entry.depth);
            return Err(PageState::DepthExceeded);
        }

        if state.budget_exhausted(&self.config) {
            tracing::debug!("Skipping {}: page budget exhausted", entry.url);
            return Err(PageState::BudgetExhausted);
        }

        if let Some(robots) = state.robots.as_mut() {
            if !robots.allowed(&entry.url, self.fetcher.as_ref()).await {
                tracing::warn!("Skipping {}: disallowed by robots.txt", entry.url);
                return Err(PageState::RobotsDenied);
            }
        }

        state.visited.insert_if_absent(&key);
        Ok(())
    }

    /// Folds a worker's report into the crawl state
    fn absorb(&self, report: PageReport, state: &mut CrawlState) {
        let PageReport { entry, outcome } = report;

        match outcome {
            Ok(page) => {
                tracing::debug!(
                    "Fetched {} ({}): {} results, {} links",
                    entry.url,
                    page.title.as_deref().unwrap_or("untitled"),
                    page.results.total(),
                    page.links.len()
                );

                state.results.merge(page.results);
                state.stats.links_discovered += page.links.len() as u64;

                let child_depth = entry.depth + 1;
                let expand = child_depth < self.config.depth_limit()
                    && !state.budget_exhausted(&self.config);

                let mut children = Vec::new();
                for link in page.links {
                    state.results.insert(Category::Urls, link.as_str());
                    if expand && !state.visited.contains(&normalize_url(&link)) {
                        children.push(FrontierEntry::new(link, child_depth));
                    }
                }
                state.frontier.push_children(children);
                state.stats.record(PageState::Fetched);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", entry.url, e);
                state.stats.record(PageState::Failed);
            }
        }

        state.completed += 1;
        if self.config.progress && state.completed % PROGRESS_INTERVAL == 0 {
            let elapsed = state.started.elapsed();
            let rate = state.completed as f64 / elapsed.as_secs_f64();
            tracing::info!(
                "Progress: {} pages crawled, {} in frontier, {:.2} pages/sec",
                state.completed,
                state.frontier.len(),
                rate
            );
        }
    }
}

/// Mutable state of one crawl, owned by the coordinator loop
struct CrawlState {
    visited: VisitedSet,
    frontier: Frontier,
    results: ResultSet,
    stats: CrawlStatistics,
    robots: Option<RobotsCache>,
    completed: u64,
    started: Instant,
}

impl CrawlState {
    fn new(config: &CrawlConfig) -> Self {
        Self {
            visited: VisitedSet::new(),
            frontier: Frontier::new(config.order),
            results: ResultSet::new(),
            stats: CrawlStatistics::new(),
            robots: config
                .respect_robots
                .then(|| RobotsCache::new(config.user_agent.as_str())),
            completed: 0,
            started: Instant::now(),
        }
    }

    fn budget_exhausted(&self, config: &CrawlConfig) -> bool {
        self.visited.len() >= config.max_pages
    }

    fn finish(self, cancelled: bool) -> CrawlOutcome {
        let mut stats = self.stats;
        stats.elapsed = self.started.elapsed();
        CrawlOutcome {
            results: self.results,
            stats,
            cancelled,
        }
    }
}

/// Result of visiting one page, sent back from a worker
struct PageReport {
    entry: FrontierEntry,
    outcome: Result<PageData, FetchError>,
}

/// What a successfully fetched page contributed
struct PageData {
    title: Option<String>,
    results: ResultSet,
    links: Vec<Url>,
}

/// Worker body: one fetch, then parse, extract and resolve
async fn visit_page<F, E>(fetcher: Arc<F>, extractor: Arc<E>, entry: FrontierEntry) -> PageReport
where
    F: Fetcher,
    E: Extractor,
{
    let outcome = fetcher
        .fetch(&entry.url)
        .await
        .map(|page| process_page(&page, extractor.as_ref()));

    PageReport { entry, outcome }
}

/// Parses a fetched page and mines it
///
/// Links are resolved against the final URL so relative hrefs on a
/// redirected page point where the browser would send them.
fn process_page<E: Extractor + ?Sized>(page: &FetchedPage, extractor: &E) -> PageData {
    let parsed = parse_html(&page.content);
    let results = extractor.extract(&parsed.text, &parsed.hrefs);
    let links = resolve_links(&page.final_url, &parsed.hrefs);

    PageData {
        title: parsed.title,
        results,
        links,
    }
}
