//! robots.txt rule matching backed by the `robotstxt` crate

use robotstxt::DefaultMatcher;
use url::Url;

/// Parsed robots.txt for one origin
///
/// Keeps the raw body and defers matching to [`DefaultMatcher`], which
/// implements Google's reference semantics (longest match wins, `Allow`
/// beats `Disallow` on ties, agent groups matched case-insensitively).
#[derive(Debug, Clone, Default)]
pub struct ParsedRobots {
    body: Option<String>,
}

impl ParsedRobots {
    /// Wraps a fetched robots.txt body
    pub fn from_content(content: &str) -> Self {
        Self {
            body: Some(content.to_string()),
        }
    }

    /// Permissive rules used when robots.txt is missing or unreachable
    pub fn allow_all() -> Self {
        Self { body: None }
    }

    /// Returns true when no rule can ever deny a URL
    pub fn is_permissive(&self) -> bool {
        self.body.as_deref().map_or(true, |body| body.trim().is_empty())
    }

    /// Checks whether `user_agent` may fetch `url`
    ///
    /// Groups are matched on the product token, so `WebScraper/0.1.0` obeys
    /// a `User-agent: WebScraper` group.
    pub fn is_allowed(&self, url: &Url, user_agent: &str) -> bool {
        if self.is_permissive() {
            return true;
        }
        let body = self.body.as_deref().unwrap_or_default();
        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(body, product_token(user_agent), url.as_str())
    }
}

/// Leading `[A-Za-z_-]` run of a User-Agent header value
fn product_token(user_agent: &str) -> &str {
    let end = user_agent
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '-' || c == '_'))
        .unwrap_or(user_agent.len());
    &user_agent[..end]
}
