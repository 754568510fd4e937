use crate::config::types::{CrawlConfig, FileConfig, UserAgentSection};
use crate::ConfigError;
use url::Url;

/// Upper bound on concurrent fetches
pub const MAX_CONCURRENCY: usize = 100;

/// Validates a fully merged crawl configuration
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.timeout.is_zero() {
        return Err(ConfigError::Validation(
            "timeout must be greater than zero".to_string(),
        ));
    }

    if config.concurrency < 1 || config.concurrency > MAX_CONCURRENCY {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and {}, got {}",
            MAX_CONCURRENCY, config.concurrency
        )));
    }

    validate_user_agent(&config.user_agent)?;

    Ok(())
}

/// Validates the sections that only exist in the file form
pub fn validate_file(file: &FileConfig) -> Result<(), ConfigError> {
    if let Some(user_agent) = &file.user_agent {
        validate_user_agent_section(user_agent)?;
    }

    if let Some(path) = &file.output.path {
        if path.is_empty() {
            return Err(ConfigError::Validation(
                "output path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates a raw User-Agent header value
fn validate_user_agent(user_agent: &str) -> Result<(), ConfigError> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user agent cannot be empty".to_string(),
        ));
    }

    // Header values must be visible ASCII or spaces
    if !user_agent.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
        return Err(ConfigError::Validation(format!(
            "user agent must be printable ASCII, got '{}'",
            user_agent
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_section(config: &UserAgentSection) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    if let Some(contact_url) = &config.contact_url {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}
