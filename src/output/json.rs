//! JSON rendering and persistence of crawl results
//!
//! The document always carries all seven category keys, even when a
//! category is empty, so downstream consumers never need to probe for them.

use crate::output::OutputResult;
use crate::state::{Category, ResultSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serialized form of a [`ResultSet`]
///
/// Values are sorted within each category so repeated crawls of the same
/// site produce byte-identical files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDocument {
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub social_media: Vec<String>,
    pub dates: Vec<String>,
    pub addresses: Vec<String>,
    pub prices: Vec<String>,
    pub urls: Vec<String>,
}

impl ResultDocument {
    fn field_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Emails => &mut self.emails,
            Category::PhoneNumbers => &mut self.phone_numbers,
            Category::SocialMedia => &mut self.social_media,
            Category::Dates => &mut self.dates,
            Category::Addresses => &mut self.addresses,
            Category::Prices => &mut self.prices,
            Category::Urls => &mut self.urls,
        }
    }

    fn field(&self, category: Category) -> &[String] {
        match category {
            Category::Emails => &self.emails,
            Category::PhoneNumbers => &self.phone_numbers,
            Category::SocialMedia => &self.social_media,
            Category::Dates => &self.dates,
            Category::Addresses => &self.addresses,
            Category::Prices => &self.prices,
            Category::Urls => &self.urls,
        }
    }
}

impl From<&ResultSet> for ResultDocument {
    fn from(results: &ResultSet) -> Self {
        let mut document = Self::default();
        for (category, values) in results.iter() {
            // BTreeSet iteration is already sorted
            *document.field_mut(category) = values.iter().cloned().collect();
        }
        document
    }
}

impl From<ResultDocument> for ResultSet {
    fn from(document: ResultDocument) -> Self {
        let mut results = ResultSet::new();
        for category in Category::ALL {
            results.extend(category, document.field(category).iter().map(String::as_str));
        }
        results
    }
}

/// Renders results as pretty-printed JSON with a 2-space indent
pub fn render_json(results: &ResultSet) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(&ResultDocument::from(results))?)
}

/// Writes results to `path`, creating parent directories as needed
///
/// # Arguments
///
/// * `results` - The accumulated crawl results
/// * `path` - Destination file; overwritten if it exists
///
/// # Returns
///
/// * `Ok(())` - File written
/// * `Err(OutputError)` - Directory creation, write, or serialization failed
pub fn persist(results: &ResultSet, path: &Path) -> OutputResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut json = render_json(results)?;
    json.push('\n');
    fs::write(path, json)?;

    tracing::info!("Wrote {} results to {}", results.total(), path.display());
    Ok(())
}

/// Reads a file written by [`persist`] back into a [`ResultSet`]
pub fn load(path: &Path) -> OutputResult<ResultSet> {
    let content = fs::read_to_string(path)?;
    let document: ResultDocument = serde_json::from_str(&content)?;
    Ok(document.into())
}
