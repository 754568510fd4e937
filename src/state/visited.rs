use std::collections::HashSet;

/// Set of normalized URL keys that have been dispatched for fetching
///
/// The set only ever grows during a crawl. Its size equals the number of
/// fetches issued, which is what the page budget is measured against.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` visited, returning false if it already was
    ///
    /// Only the crawl coordinator mutates the set, so a `contains` check
    /// followed by this call cannot race.
    pub fn insert_if_absent(&mut self, key: &str) -> bool {
        if self.urls.contains(key) {
            return false;
        }
        self.urls.insert(key.to_string())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.urls.contains(key)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
