use serde::Deserialize;
use std::time::Duration;

/// Default user agent sent when neither the config file nor the command line
/// supplies one
pub const DEFAULT_USER_AGENT: &str = "WebScraper/0.1.0";

/// Order in which frontier entries are taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Follow the first link of a page all the way down before its siblings
    #[default]
    DepthFirst,
    /// Visit every page at depth N before any page at depth N+1
    BreadthFirst,
}

/// Immutable settings for one crawl engine
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Link hops from the seed beyond which nothing is fetched
    pub max_depth: u32,

    /// Ceiling on distinct fetches per crawl
    pub max_pages: usize,

    /// Per-request timeout
    pub timeout: Duration,

    /// User-Agent header value
    pub user_agent: String,

    /// Consult robots.txt before each fetch
    pub respect_robots: bool,

    /// Frontier ordering
    pub order: TraversalOrder,

    /// Number of fetches allowed in flight at once
    pub concurrency: usize,

    /// Emit periodic progress log lines
    pub progress: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            max_pages: 100,
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            respect_robots: false,
            order: TraversalOrder::DepthFirst,
            concurrency: 1,
            progress: true,
        }
    }
}

impl CrawlConfig {
    /// Depth bound actually enforced by the engine
    ///
    /// The seed page is always fetched, so a configured depth of zero
    /// behaves like one.
    pub fn depth_limit(&self) -> u32 {
        self.max_depth.max(1)
    }
}

/// On-disk configuration file layout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub crawler: CrawlerSection,
    #[serde(rename = "user-agent")]
    pub user_agent: Option<UserAgentSection>,
    #[serde(default)]
    pub output: OutputSection,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrawlerSection {
    #[serde(rename = "max-depth")]
    pub max_depth: Option<u32>,

    #[serde(rename = "max-pages")]
    pub max_pages: Option<usize>,

    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    pub concurrency: Option<usize>,

    pub order: Option<TraversalOrder>,

    #[serde(rename = "respect-robots")]
    pub respect_robots: Option<bool>,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentSection {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl UserAgentSection {
    /// Formats the header value as `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(url) => format!("{}/{} (+{})", self.crawler_name, self.crawler_version, url),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    /// Where to write the JSON results
    pub path: Option<String>,
}

impl FileConfig {
    /// Applies the file's settings on top of the defaults
    pub fn to_crawl_config(&self) -> CrawlConfig {
        let defaults = CrawlConfig::default();
        let crawler = &self.crawler;

        CrawlConfig {
            max_depth: crawler.max_depth.unwrap_or(defaults.max_depth),
            max_pages: crawler.max_pages.unwrap_or(defaults.max_pages),
            timeout: crawler
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: self
                .user_agent
                .as_ref()
                .map(UserAgentSection::header_value)
                .unwrap_or(defaults.user_agent),
            respect_robots: crawler.respect_robots.unwrap_or(defaults.respect_robots),
            order: crawler.order.unwrap_or(defaults.order),
            concurrency: crawler.concurrency.unwrap_or(defaults.concurrency),
            progress: defaults.progress,
        }
    }
}
