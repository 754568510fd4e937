//! Frontier of URLs awaiting a visit
//!
//! Depth-first order is a stack, breadth-first order is a queue. Both live
//! in one `VecDeque`; only the end we pop from differs.

use crate::config::TraversalOrder;
use std::collections::VecDeque;
use url::Url;

/// A URL waiting to be visited, with its link distance from the seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub url: Url,

    /// Number of link hops from the seed (seed = 0)
    pub depth: u32,
}

impl FrontierEntry {
    pub fn new(url: Url, depth: u32) -> Self {
        Self { url, depth }
    }
}

/// Pending frontier entries in traversal order
///
/// Entries are not deduplicated here. The same URL may sit in the frontier
/// several times; the visited check on dequeue drops the repeats.
#[derive(Debug)]
pub struct Frontier {
    entries: VecDeque<FrontierEntry>,
    order: TraversalOrder,
}

impl Frontier {
    pub fn new(order: TraversalOrder) -> Self {
        Self {
            entries: VecDeque::new(),
            order,
        }
    }

    /// Adds a single entry
    pub fn push(&mut self, entry: FrontierEntry) {
        self.entries.push_back(entry);
    }

    /// Adds the links of one page, preserving document order
    ///
    /// For depth-first traversal the children go on the stack in reverse so
    /// the first link on the page is the next one popped, matching a
    /// recursive walk.
    pub fn push_children(&mut self, children: Vec<FrontierEntry>) {
        match self.order {
            TraversalOrder::DepthFirst => self.entries.extend(children.into_iter().rev()),
            TraversalOrder::BreadthFirst => self.entries.extend(children),
        }
    }

    /// Takes the next entry to visit
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        match self.order {
            TraversalOrder::DepthFirst => self.entries.pop_back(),
            TraversalOrder::BreadthFirst => self.entries.pop_front(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, depth: u32) -> FrontierEntry {
        FrontierEntry::new(
            Url::parse(&format!("https://example.com{}", path)).unwrap(),
            depth,
        )
    }

    fn drain(frontier: &mut Frontier) -> Vec<String> {
        std::iter::from_fn(|| frontier.pop())
            .map(|e| e.url.path().to_string())
            .collect()
    }

    #[test]
    fn test_depth_first_visits_first_child_first() {
        let mut frontier = Frontier::new(TraversalOrder::DepthFirst);
        frontier.push_children(vec![entry("/a", 1), entry("/b", 1), entry("/c", 1)]);

        let first = frontier.pop().unwrap();
        assert_eq!(first.url.path(), "/a");

        // Children of /a come before its siblings
        frontier.push_children(vec![entry("/a/1", 2), entry("/a/2", 2)]);
        assert_eq!(drain(&mut frontier), vec!["/a/1", "/a/2", "/b", "/c"]);
    }

    #[test]
    fn test_breadth_first_finishes_level_first() {
        let mut frontier = Frontier::new(TraversalOrder::BreadthFirst);
        frontier.push_children(vec![entry("/a", 1), entry("/b", 1), entry("/c", 1)]);

        let first = frontier.pop().unwrap();
        assert_eq!(first.url.path(), "/a");

        frontier.push_children(vec![entry("/a/1", 2), entry("/a/2", 2)]);
        assert_eq!(drain(&mut frontier), vec!["/b", "/c", "/a/1", "/a/2"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut frontier = Frontier::new(TraversalOrder::BreadthFirst);
        frontier.push(entry("/a", 0));
        frontier.push(entry("/a", 1));
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_empty_frontier() {
        let mut frontier = Frontier::new(TraversalOrder::DepthFirst);
        assert!(frontier.is_empty());
        assert!(frontier.pop().is_none());

        frontier.push(entry("/", 0));
        assert!(!frontier.is_empty());
        assert!(frontier.pop().is_some());
        assert!(frontier.is_empty());
    }
}
