use crate::config::types::FileConfig;
use crate::config::validation::{validate, validate_file};
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// The returned file config still has to be turned into a
/// [`CrawlConfig`](crate::config::CrawlConfig) and have command-line
/// overrides applied; [`validate`] runs again on the final value.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(FileConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use webscraper::config::load_config;
///
/// let file = load_config(Path::new("crawl.toml")).unwrap();
/// println!("Max pages: {:?}", file.crawler.max_pages);
/// ```
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses configuration from TOML text
pub fn parse_config(content: &str) -> Result<FileConfig, ConfigError> {
    let file: FileConfig = toml::from_str(content)?;

    validate_file(&file)?;
    validate(&file.to_crawl_config())?;

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TraversalOrder;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
max-depth = 3
max-pages = 250
timeout-secs = 10
concurrency = 4
order = "breadth-first"
respect-robots = true

[user-agent]
crawler-name = "TestCrawler"
crawler-version = "1.0"
contact-url = "https://example.com/about"

[output]
path = "./results.json"
"#;

        let file = create_temp_config(config_content);
        let loaded = load_config(file.path()).unwrap();
        let config = loaded.to_crawl_config();

        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_pages, 250);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.order, TraversalOrder::BreadthFirst);
        assert!(config.respect_robots);
        assert_eq!(
            config.user_agent,
            "TestCrawler/1.0 (+https://example.com/about)"
        );
        assert_eq!(loaded.output.path.as_deref(), Some("./results.json"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let loaded = parse_config("").unwrap();
        let config = loaded.to_crawl_config();

        assert_eq!(config.max_depth, 2);
        assert_eq!(config.max_pages, 100);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.order, TraversalOrder::DepthFirst);
        assert!(!config.respect_robots);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/crawl.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_order_rejected() {
        let result = parse_config("[crawler]\norder = \"random\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[crawler]
max-pages = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
