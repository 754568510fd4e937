//! HTML parser for extracting page text and anchors
//!
//! This module handles parsing HTML content to extract:
//! - The text the extractor runs its patterns over
//! - Raw `href` values of anchors, left unresolved for the link resolver
//! - Page title for logging

use scraper::{Html, Selector};
use std::sync::LazyLock;

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").expect("Failed to parse title selector - this is a bug")
});

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("Failed to parse anchor selector - this is a bug")
});

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// Concatenation of every text node in document order
    pub text: String,

    /// Raw href attribute values of `<a>` elements in document order
    pub hrefs: Vec<String>,
}

/// Parses HTML content and extracts text, anchors and title
///
/// Text nodes are joined with a single space so that content of adjacent
/// elements never runs together. Script and style contents are included;
/// the extraction patterns are lenient enough not to care.
///
/// Malformed markup never fails: html5ever recovers from anything.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
///
/// # Example
///
/// ```
/// use webscraper::crawler::parse_html;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.hrefs, vec!["/page".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        text: document.root_element().text().collect::<Vec<_>>().join(" "),
        hrefs: extract_hrefs(&document),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Collects href values of every anchor, untouched
fn extract_hrefs(document: &Html) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
