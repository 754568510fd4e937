/// Page state definitions for tracking crawl progress
///
/// Every frontier entry that gets dequeued ends in exactly one of these
/// states. The skip states are checked in the fixed order visited, depth,
/// budget, robots so that the reason recorded is unambiguous.
use std::fmt;

/// Represents the outcome of a dequeued frontier entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageState {
    // ===== Fetch States =====
    /// Page was fetched and its extraction results merged
    Fetched,

    /// Fetch failed (timeout, connection, status, encoding); page contributes nothing
    Failed,

    // ===== Skip States =====
    /// URL was already in the visited set
    AlreadyVisited,

    /// Entry depth is at or beyond the depth limit
    DepthExceeded,

    /// Page budget is spent
    BudgetExhausted,

    /// robots.txt disallows the URL
    RobotsDenied,
}

impl PageState {
    /// Returns true if a fetch was issued for this entry
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetched | Self::Failed)
    }

    /// Returns true if the entry was dropped without a fetch
    pub fn is_skipped(&self) -> bool {
        !self.is_fetch()
    }

    /// Short snake_case label used in logs and statistics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetched => "fetched",
            Self::Failed => "failed",
            Self::AlreadyVisited => "already_visited",
            Self::DepthExceeded => "depth_exceeded",
            Self::BudgetExhausted => "budget_exhausted",
            Self::RobotsDenied => "robots_denied",
        }
    }

    /// Returns all possible page states
    pub fn all_states() -> [Self; 6] {
        [
            Self::Fetched,
            Self::Failed,
            Self::AlreadyVisited,
            Self::DepthExceeded,
            Self::BudgetExhausted,
            Self::RobotsDenied,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
