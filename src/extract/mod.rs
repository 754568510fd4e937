//! Structured data extraction
//!
//! The crawl engine treats extraction as a pluggable, stateless capability:
//! anything implementing [`Extractor`] can be handed to
//! [`CrawlEngine::new`](crate::crawler::CrawlEngine::new).

pub mod patterns;

use crate::state::{Category, ResultSet};

/// Turns one page into category-tagged sets of strings
///
/// Implementations must be pure functions of their inputs; the engine calls
/// them from worker tasks concurrently.
pub trait Extractor: Send + Sync {
    /// Extracts data from a page
    ///
    /// # Arguments
    ///
    /// * `text` - The page's text content
    /// * `hrefs` - Raw `href` values of the page's anchors
    ///
    /// # Returns
    ///
    /// A page-scoped [`ResultSet`], already deduplicated within the page
    fn extract(&self, text: &str, hrefs: &[String]) -> ResultSet;
}

/// Default regex-driven extractor
///
/// Fills every category except `urls`, which the engine records from the
/// link resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl Extractor for PatternExtractor {
    fn extract(&self, text: &str, hrefs: &[String]) -> ResultSet {
        let mut results = ResultSet::new();

        results.extend(Category::Emails, patterns::emails(text));
        results.extend(Category::PhoneNumbers, patterns::phone_numbers(text));
        results.extend(Category::SocialMedia, patterns::social_media(text));
        results.extend(
            Category::SocialMedia,
            hrefs
                .iter()
                .filter(|href| patterns::is_social_href(href))
                .map(String::as_str),
        );
        results.extend(Category::Dates, patterns::dates(text));
        results.extend(Category::Addresses, patterns::addresses(text));
        results.extend(Category::Prices, patterns::prices(text));

        results
    }
}
