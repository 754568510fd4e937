//! WebScraper command-line entry point
//!
//! Crawls from one seed URL and prints (or saves) the extracted data as JSON.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use webscraper::config::{load_config, validate, CrawlConfig, TraversalOrder};
use webscraper::output::{persist, print_statistics, render_json};
use webscraper::{CrawlEngine, ConfigError, OutputError, ScraperError};

/// Exit status for invalid settings
const EXIT_CONFIG: u8 = 1;

/// Exit status when results could not be written (sysexits EX_IOERR)
const EXIT_IO: u8 = 74;

/// WebScraper: extract contact data from websites
///
/// Crawls from a starting URL, following links up to a depth and page
/// budget, and collects emails, phone numbers, social media handles, dates,
/// street addresses, prices and every discovered URL.
#[derive(Parser, Debug)]
#[command(name = "crawl")]
#[command(version = "0.1.0")]
#[command(about = "Extract data from websites", long_about = None)]
struct Cli {
    /// Starting URL to crawl
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Maximum link depth to crawl [default: 2]
    #[arg(short, long, value_name = "N")]
    depth: Option<u32>,

    /// Maximum number of pages to fetch [default: 100]
    #[arg(short = 'p', long, value_name = "N")]
    max_pages: Option<usize>,

    /// Request timeout in seconds [default: 30]
    #[arg(short, long, value_name = "SEC")]
    timeout: Option<u64>,

    /// Write results to a JSON file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// User-Agent header to send
    #[arg(long, value_name = "STR")]
    user_agent: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Honor robots.txt rules
    #[arg(long)]
    respect_robots: bool,

    /// Disable periodic progress logging
    #[arg(long)]
    no_progress: bool,

    /// Visit pages level by level instead of depth-first
    #[arg(long)]
    breadth_first: bool,

    /// Number of pages fetched in parallel [default: 1]
    #[arg(short = 'j', long, value_name = "N")]
    concurrency: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show usage examples
    #[arg(long)]
    examples: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too
            let code = if e.use_stderr() { EXIT_CONFIG } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    run(cli).await
}

/// Dispatches a parsed command line
///
/// Without a URL this only prints usage (or the examples) and succeeds.
async fn run(cli: Cli) -> ExitCode {
    if cli.examples {
        print_banner();
        print_examples();
        return ExitCode::SUCCESS;
    }

    let Some(seed) = cli.url.clone() else {
        print_banner();
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    setup_logging(cli.verbose, cli.quiet);

    match handle_crawl(&cli, &seed).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is reserved for the JSON results.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("webscraper=warn,crawl=warn"),
            1 => EnvFilter::new("webscraper=info,crawl=info"),
            2 => EnvFilter::new("webscraper=debug,crawl=debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Merges defaults, the optional config file and command-line flags
///
/// Returns the crawl settings plus the output path, if any.
fn build_config(cli: &Cli) -> Result<(CrawlConfig, Option<PathBuf>), ConfigError> {
    let (mut config, file_output) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let file = load_config(path)?;
            (file.to_crawl_config(), file.output.path.map(PathBuf::from))
        }
        None => (CrawlConfig::default(), None),
    };

    if let Some(depth) = cli.depth {
        config.max_depth = depth;
    }
    if let Some(max_pages) = cli.max_pages {
        config.max_pages = max_pages;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = Duration::from_secs(timeout);
    }
    if let Some(user_agent) = &cli.user_agent {
        config.user_agent = user_agent.clone();
    }
    if let Some(concurrency) = cli.concurrency {
        config.concurrency = concurrency;
    }
    if cli.respect_robots {
        config.respect_robots = true;
    }
    if cli.no_progress {
        config.progress = false;
    }
    if cli.breadth_first {
        config.order = TraversalOrder::BreadthFirst;
    }

    validate(&config)?;
    Ok((config, cli.output.clone().or(file_output)))
}

/// Handles the main crawl operation
async fn handle_crawl(cli: &Cli, seed: &str) -> anyhow::Result<()> {
    let (config, output) = build_config(cli)?;
    let engine = CrawlEngine::from_config(config)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, finishing with partial results");
            on_interrupt.cancel();
        }
    });

    let outcome = engine.crawl_with_cancellation(seed, cancel).await;

    if cli.verbose > 0 {
        print_statistics(&outcome.stats, &outcome.results);
    }

    match output {
        Some(path) => {
            persist(&outcome.results, &path)
                .with_context(|| format!("Failed to save results to {}", path.display()))?;
            tracing::info!("Results saved to: {}", path.display());
        }
        None => println!("{}", render_json(&outcome.results)?),
    }

    Ok(())
}

/// Maps a failure to the process exit status
fn exit_code(error: &anyhow::Error) -> u8 {
    if error.downcast_ref::<OutputError>().is_some() {
        return EXIT_IO;
    }
    match error.downcast_ref::<ScraperError>() {
        Some(ScraperError::Output(_)) => EXIT_IO,
        _ => EXIT_CONFIG,
    }
}

fn print_banner() {
    println!(
        r#"
    +-------------------------------------------+
    |                WebScraper                 |
    |        Extract Data from Websites         |
    +-------------------------------------------+
"#
    );
}

fn print_examples() {
    println!(
        r#"Usage examples

  1. Default crawl, results on stdout:
     $ crawl https://example.com
     (depth 2, at most 100 pages)

  2. Deeper crawl with a bigger budget:
     $ crawl https://example.com -d 4 -p 500

  3. Save results to a file:
     $ crawl https://example.com -o company_data.json

  4. Quick scan of the start page only:
     $ crawl https://example.com -d 1 -p 10

  5. Polite, verbose crawl:
     $ crawl https://example.com -d 3 -v --respect-robots

  6. Breadth-first with eight parallel fetches:
     $ crawl https://example.com --breadth-first -j 8

  7. Settings from a file, overridden on the command line:
     $ crawl https://example.com -c crawl.toml -p 50

Extracted categories: emails, phone_numbers, social_media, dates,
addresses, prices, urls"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("crawl").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_without_flags() {
        let (config, output) = build_config(&parse(&["https://example.com"])).unwrap();
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.max_pages, 100);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.respect_robots);
        assert!(output.is_none());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[crawler]\nmax-depth = 5\nmax-pages = 40\n\n[output]\npath = \"from-file.json\""
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = parse(&["https://example.com", "-c", path, "-p", "7", "--breadth-first"]);
        let (config, output) = build_config(&cli).unwrap();

        assert_eq!(config.max_depth, 5);
        assert_eq!(config.max_pages, 7);
        assert_eq!(config.order, TraversalOrder::BreadthFirst);
        assert_eq!(output, Some(PathBuf::from("from-file.json")));

        let cli = parse(&["https://example.com", "-c", path, "-o", "cli.json"]);
        let (_, output) = build_config(&cli).unwrap();
        assert_eq!(output, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let cli = parse(&["https://example.com", "-p", "0"]);
        assert!(matches!(build_config(&cli), Err(ConfigError::Validation(_))));

        let cli = parse(&["https://example.com", "-j", "1000"]);
        assert!(build_config(&cli).is_err());
    }

    #[tokio::test]
    async fn test_no_arguments_prints_usage_and_succeeds() {
        let cli = parse(&[]);
        assert!(cli.url.is_none());
        assert_eq!(run(cli).await, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_examples_flag_succeeds() {
        assert_eq!(run(parse(&["--examples"])).await, ExitCode::SUCCESS);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["crawl", "https://example.com", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_exit_codes() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = anyhow::Error::from(OutputError::Io(io)).context("Failed to save results");
        assert_eq!(exit_code(&error), EXIT_IO);

        let error = anyhow::Error::from(ConfigError::Validation("bad".to_string()));
        assert_eq!(exit_code(&error), EXIT_CONFIG);
    }
}
