//! Accumulated extraction results
//!
//! The category set is closed: seven fixed buckets, each a deduplicated
//! set of strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One of the seven extraction buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Emails,
    PhoneNumbers,
    SocialMedia,
    Dates,
    Addresses,
    Prices,
    Urls,
}

impl Category {
    /// All categories in output order
    pub const ALL: [Category; 7] = [
        Category::Emails,
        Category::PhoneNumbers,
        Category::SocialMedia,
        Category::Dates,
        Category::Addresses,
        Category::Prices,
        Category::Urls,
    ];

    /// Key used in the structured output
    pub fn key(&self) -> &'static str {
        match self {
            Self::Emails => "emails",
            Self::PhoneNumbers => "phone_numbers",
            Self::SocialMedia => "social_media",
            Self::Dates => "dates",
            Self::Addresses => "addresses",
            Self::Prices => "prices",
            Self::Urls => "urls",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Category-tagged sets of extracted strings
///
/// Used both for a single page's extraction output and for the global
/// accumulation of a crawl. Merging is set union, so merging the same value
/// twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    sets: [BTreeSet<String>; 7],
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to a category, returning true if it was new
    pub fn insert(&mut self, category: Category, value: impl Into<String>) -> bool {
        self.sets[category.index()].insert(value.into())
    }

    /// Adds many values to one category
    pub fn extend<I, S>(&mut self, category: Category, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets[category.index()].extend(values.into_iter().map(Into::into));
    }

    /// Unions every category of `other` into `self`
    pub fn merge(&mut self, other: ResultSet) {
        for (mine, theirs) in self.sets.iter_mut().zip(other.sets) {
            if mine.is_empty() {
                *mine = theirs;
            } else {
                mine.extend(theirs);
            }
        }
    }

    /// Returns the values of one category in sorted order
    pub fn get(&self, category: Category) -> &BTreeSet<String> {
        &self.sets[category.index()]
    }

    pub fn contains(&self, category: Category, value: &str) -> bool {
        self.sets[category.index()].contains(value)
    }

    /// Number of values in one category
    pub fn count(&self, category: Category) -> usize {
        self.sets[category.index()].len()
    }

    /// Number of values across all categories
    pub fn total(&self) -> usize {
        self.sets.iter().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(BTreeSet::is_empty)
    }

    /// Iterates categories in output order with their values
    pub fn iter(&self) -> impl Iterator<Item = (Category, &BTreeSet<String>)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
