use url::Url;

/// Returns the origin of a URL as `scheme://host[:port]`
///
/// robots.txt applies per origin, so this is the key its cache uses.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use webscraper::url::extract_origin;
///
/// let url = Url::parse("https://Example.com:8443/path?q=1").unwrap();
/// assert_eq!(extract_origin(&url), Some("https://example.com:8443".to_string()));
/// ```
pub fn extract_origin(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

/// Builds the robots.txt URL for the origin of `url`
pub fn robots_url(url: &Url) -> Option<Url> {
    let origin = extract_origin(url)?;
    Url::parse(&format!("{}/robots.txt", origin)).ok()
}
