//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent and timeout
//! - GET requests to fetch page content
//! - Error classification into [`FetchError`]
//!
//! There is no retry here. A failed page is reported once and the engine
//! moves on.

use crate::config::CrawlConfig;
use crate::FetchError;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client};
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Maximum redirect hops followed per request
pub const MAX_REDIRECTS: usize = 10;

/// Upper bound on the connect phase of a request
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Decoded response body
    pub content: String,

    /// Content-Type header value, if any
    pub content_type: Option<String>,

    /// Final URL after redirects
    pub final_url: Url,

    /// HTTP status code
    pub status: u16,
}

/// Source of page content
///
/// The engine only depends on this trait, so tests can drive a crawl from
/// memory and callers can swap in their own transport.
pub trait Fetcher: Send + Sync + 'static {
    /// Issues exactly one request for `url`
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawl configuration (user agent and timeout are used)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use webscraper::config::CrawlConfig;
/// use webscraper::crawler::build_http_client;
///
/// let client = build_http_client(&CrawlConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(config.timeout))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest-backed [`Fetcher`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a client built from `config`
    pub fn new(config: &CrawlConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        fetch_url(&self.client, url).await
    }
}

/// Fetches a URL and classifies the outcome
///
/// # Outcome Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with UTF-8 body | `Ok(FetchedPage)` |
/// | Non-2xx status (after redirects) | `HttpStatus(code)` |
/// | Timeout (connect or total) | `Timeout` |
/// | Connection refused, DNS, TLS, redirect limit | `ConnectionFailed` |
/// | Body is not valid UTF-8 | `InvalidEncoding` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &Url) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(classify_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.bytes().await.map_err(classify_error)?;
    let content = String::from_utf8(body.to_vec()).map_err(|_| FetchError::InvalidEncoding)?;

    Ok(FetchedPage {
        content,
        content_type,
        final_url,
        status: status.as_u16(),
    })
}

/// Maps a transport error onto the fetch error taxonomy
fn classify_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        FetchError::ConnectionFailed(format!("connection refused: {}", error))
    } else {
        FetchError::ConnectionFailed(error.to_string())
    }
}
