//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageState`: outcome of each dequeued frontier entry
//! - `VisitedSet`: URLs dispatched for fetching, the revisit gate
//! - `ResultSet`: category-tagged extraction results

mod page_state;
mod results;
mod visited;

// Re-export main types
pub use page_state::PageState;
pub use results::{Category, ResultSet};
pub use visited::VisitedSet;
