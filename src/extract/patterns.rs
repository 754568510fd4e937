//! Pattern rules for each extraction category
//!
//! Every rule is an independent regular expression compiled once on first
//! use. A match contributes its matched text verbatim; no semantic
//! validation is done (`2024-13-40` is a date here).

use regex::Regex;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

// Phone shapes overlap; the same number can come back as several substrings
const PHONE_INTERNATIONAL_PATTERN: &str =
    r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";
const PHONE_NORTH_AMERICA_PATTERN: &str = r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";
const PHONE_GROUPED_PATTERN: &str = r"\d{4}[-.\s]?\d{3}[-.\s]?\d{3}";

// Handle must not follow a word character, otherwise every e-mail address
// would also produce one
const SOCIAL_HANDLE_PATTERN: &str = r"(?:^|[^\w@.])(@\w+)";
const TWITTER_URL_PATTERN: &str = r"\b(?:twitter|x)\.com/\w+";
const FACEBOOK_URL_PATTERN: &str = r"\b(?:facebook|fb)\.com/\w+";
const INSTAGRAM_URL_PATTERN: &str = r"\binstagram\.com/\w+";
const LINKEDIN_URL_PATTERN: &str = r"\blinkedin\.com/(?:in|company)/[\w-]+";
const GITHUB_URL_PATTERN: &str = r"\bgithub\.com/\w+";

const DATE_ISO_PATTERN: &str = r"\d{4}-\d{2}-\d{2}";
const DATE_US_PATTERN: &str = r"\d{2}/\d{2}/\d{4}";
const DATE_HUMAN_PATTERN: &str =
    r"\d{1,2}\s(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s\d{4}";

const ADDRESS_PATTERN: &str = r"(?i)\d+\s+[A-Za-z0-9\s,]+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr)\s*,?\s*[A-Za-z\s]+,\s*[A-Z]{2}\s*\d{5}";

const PRICE_PATTERN: &str = r"(?:USD|\$|€|£)\s*\d+(?:,\d{3})*(?:\.\d{2})?";

/// Platform domains whose links count as social media wherever they appear
pub const SOCIAL_PLATFORM_DOMAINS: [&str; 7] = [
    "twitter.com",
    "x.com",
    "facebook.com",
    "fb.com",
    "instagram.com",
    "linkedin.com",
    "github.com",
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hardcoded regex pattern is valid")
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL_PATTERN));

static PHONE_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        compile(PHONE_INTERNATIONAL_PATTERN),
        compile(PHONE_NORTH_AMERICA_PATTERN),
        compile(PHONE_GROUPED_PATTERN),
    ]
});

static SOCIAL_HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| compile(SOCIAL_HANDLE_PATTERN));

static SOCIAL_URL_RES: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        compile(TWITTER_URL_PATTERN),
        compile(FACEBOOK_URL_PATTERN),
        compile(INSTAGRAM_URL_PATTERN),
        compile(LINKEDIN_URL_PATTERN),
        compile(GITHUB_URL_PATTERN),
    ]
});

static DATE_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        compile(DATE_ISO_PATTERN),
        compile(DATE_US_PATTERN),
        compile(DATE_HUMAN_PATTERN),
    ]
});

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| compile(ADDRESS_PATTERN));

static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| compile(PRICE_PATTERN));

fn find_all<'t>(re: &'static Regex, text: &'t str) -> impl Iterator<Item = &'t str> {
    re.find_iter(text).map(|m| m.as_str())
}

pub fn emails(text: &str) -> Vec<&str> {
    find_all(&EMAIL_RE, text).collect()
}

/// Union of the three phone shapes, deduplicated by exact text only
pub fn phone_numbers(text: &str) -> Vec<&str> {
    PHONE_RES.iter().flat_map(|re| find_all(re, text)).collect()
}

/// Handles and platform profile paths found in free text
pub fn social_media(text: &str) -> Vec<&str> {
    let handles = SOCIAL_HANDLE_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str());

    let profiles = SOCIAL_URL_RES.iter().flat_map(|re| find_all(re, text));

    handles.chain(profiles).collect()
}

/// Returns true if `href` mentions a known platform domain
///
/// The domain must start at a label boundary, so `dropbox.com` does not
/// count as `x.com`.
pub fn is_social_href(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();

    SOCIAL_PLATFORM_DOMAINS.iter().any(|domain| {
        lower.match_indices(*domain).any(|(start, _)| {
            lower[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '-'))
        })
    })
}

pub fn dates(text: &str) -> Vec<&str> {
    DATE_RES.iter().flat_map(|re| find_all(re, text)).collect()
}

pub fn addresses(text: &str) -> Vec<&str> {
    find_all(&ADDRESS_RE, text).collect()
}

pub fn prices(text: &str) -> Vec<&str> {
    find_all(&PRICE_RE, text).collect()
}
