//! Link resolution
//!
//! Turns raw `href` values into absolute crawlable URLs. Anything that does
//! not survive the join or the scheme/host filter is dropped without error,
//! since real-world markup is full of junk links.

use crate::url::normalize::check_crawlable;
use url::Url;

/// Resolves one href against a base URL
///
/// Handles relative paths, absolute URLs, fragment-only links and
/// protocol-relative (`//host/path`) links per standard URL joining.
///
/// # Returns
///
/// * `Some(Url)` - An absolute http(s) URL with a host
/// * `None` - The href is empty, malformed, or resolves to another scheme
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let resolved = base.join(href).ok()?;
    check_crawlable(&resolved).ok()?;
    Some(resolved)
}

/// Resolves every href against `base`, keeping document order
///
/// Duplicates are preserved; callers that need a set deduplicate
/// themselves.
///
/// # Example
///
/// ```
/// use url::Url;
/// use webscraper::url::resolve_links;
///
/// let base = Url::parse("https://example.com/docs/index.html").unwrap();
/// let links = resolve_links(&base, &["intro.html", "mailto:a@b.com", "//cdn.example.com/x"]);
/// let links: Vec<&str> = links.iter().map(|u| u.as_str()).collect();
/// assert_eq!(links, ["https://example.com/docs/intro.html", "https://cdn.example.com/x"]);
/// ```
pub fn resolve_links<S: AsRef<str>>(base: &Url, hrefs: &[S]) -> Vec<Url> {
    hrefs
        .iter()
        .filter_map(|href| resolve_link(base, href.as_ref()))
        .collect()
}
