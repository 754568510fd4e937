use crate::UrlError;
use url::Url;

/// Parses a string as a crawlable URL
///
/// Only absolute `http` and `https` URLs with a non-empty host qualify.
///
/// # Arguments
///
/// * `url_str` - The URL string to check
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(UrlError)` - The string is malformed, uses another scheme, or has no host
///
/// # Examples
///
/// ```
/// use webscraper::url::parse_crawl_url;
///
/// assert!(parse_crawl_url("https://example.com/page").is_ok());
/// assert!(parse_crawl_url("ftp://example.com/file").is_err());
/// ```
pub fn parse_crawl_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;
    check_crawlable(&url)?;
    Ok(url)
}

/// Checks scheme and host of an already parsed URL
pub(crate) fn check_crawlable(url: &Url) -> Result<(), UrlError> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlError::MissingHost),
    }
}

/// Returns true if the string is an absolute http(s) URL with a host
pub fn is_valid_url(url_str: &str) -> bool {
    parse_crawl_url(url_str).is_ok()
}

/// Produces the visited-set key for a URL
///
/// Two URLs that differ only by fragment address the same document, so the
/// fragment is dropped. Scheme and host are already lowercased by the
/// parser and the empty path is already `/`; path and query are kept
/// verbatim.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use webscraper::url::normalize_url;
///
/// let url = Url::parse("HTTPS://Example.COM/About#team").unwrap();
/// assert_eq!(normalize_url(&url), "https://example.com/About");
/// ```
pub fn normalize_url(url: &Url) -> String {
    let mut key = url.clone();
    key.set_fragment(None);
    key.into()
}
