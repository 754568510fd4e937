//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end through the reqwest fetcher.

use std::time::Duration;
use tempfile::TempDir;
use webscraper::config::{CrawlConfig, TraversalOrder};
use webscraper::output::{load, persist, render_json};
use webscraper::{Category, CrawlEngine, PageState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a short timeout
fn create_test_config(max_depth: u32, max_pages: usize) -> CrawlConfig {
    CrawlConfig {
        max_depth,
        max_pages,
        timeout: Duration::from_secs(5),
        user_agent: "TestBot/1.0".to_string(),
        ..CrawlConfig::default()
    }
}

/// Mounts an HTML page that must be requested exactly `times` times
async fn mount_page(server: &MockServer, page: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html"))
        .expect(times)
        .mount(server)
        .await;
}

/// Paths of every GET the server saw, in arrival order
async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}

/// A three-page company site: home links to about and products
async fn mount_company_site(server: &MockServer) {
    let home = r#"<html><head><title>Acme</title></head><body>
        <p>Contact: sales@acme.com or call (555) 123-4567</p>
        <a href="/about">About</a>
        <a href="products">Products</a>
        <a href="/#top">Top</a>
        </body></html>"#;

    let about = r#"<html><body>
        <p>Visit us at 123 Main Street, Springfield, IL 62704</p>
        <p>Follow @acmecorp for news since 2019-03-15</p>
        <a href="https://twitter.com/acmecorp">Twitter</a>
        <a href="/">Home</a>
        </body></html>"#;

    let products = r#"<html><body>
        <p>Widget: $1,299.99 until 12/31/2024</p>
        <a href="/about">About us</a>
        <a href="/products/deep">More</a>
        </body></html>"#;

    mount_page(server, "/", home, 1).await;
    mount_page(server, "/about", about, 1).await;
    mount_page(server, "/products", products, 1).await;
}

#[tokio::test]
async fn test_full_crawl_single_site() {
    let server = MockServer::start().await;
    mount_company_site(&server).await;

    // Depth 2: the seed plus its direct links
    Mock::given(method("GET"))
        .and(path("/products/deep"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let engine = CrawlEngine::from_config(create_test_config(2, 100)).unwrap();
    let outcome = engine.crawl(&format!("{}/", server.uri())).await;
    let results = &outcome.results;

    assert!(results.contains(Category::Emails, "sales@acme.com"));
    assert!(results.contains(Category::PhoneNumbers, "(555) 123-4567"));
    assert!(results.contains(Category::SocialMedia, "@acmecorp"));
    assert!(results.contains(Category::SocialMedia, "https://twitter.com/acmecorp"));
    assert!(results.contains(Category::Dates, "2019-03-15"));
    assert!(results.contains(Category::Dates, "12/31/2024"));
    assert!(results.contains(Category::Prices, "$1,299.99"));
    assert_eq!(results.count(Category::Addresses), 1);

    // Every resolved link is recorded, fetched or not
    let base = server.uri();
    assert!(results.contains(Category::Urls, &format!("{}/about", base)));
    assert!(results.contains(Category::Urls, &format!("{}/products", base)));
    assert!(results.contains(Category::Urls, &format!("{}/products/deep", base)));
    assert!(results.contains(Category::Urls, &format!("{}/#top", base)));
    assert!(results.contains(Category::Urls, "https://twitter.com/acmecorp"));

    assert_eq!(outcome.stats.pages_fetched(), 3);
    assert!(!outcome.cancelled);
}

#[tokio::test]
async fn test_depth_first_and_breadth_first_orders() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<a href="/a">a</a><a href="/b">b</a>"#,
        2,
    )
    .await;
    mount_page(&server, "/a", r#"<a href="/a/1">a1</a>"#, 2).await;
    mount_page(&server, "/b", "", 2).await;
    mount_page(&server, "/a/1", "", 2).await;

    let seed = format!("{}/", server.uri());

    let engine = CrawlEngine::from_config(create_test_config(3, 100)).unwrap();
    engine.crawl(&seed).await;

    let bfs = CrawlConfig {
        order: TraversalOrder::BreadthFirst,
        ..create_test_config(3, 100)
    };
    let engine = CrawlEngine::from_config(bfs).unwrap();
    engine.crawl(&seed).await;

    assert_eq!(
        requested_paths(&server).await,
        vec!["/", "/a", "/a/1", "/b", "/", "/a", "/b", "/a/1"]
    );
}

#[tokio::test]
async fn test_respects_robots_txt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /private"),
        )
        .expect(1)
        .mount(&server)
        .await;

    mount_page(
        &server,
        "/",
        r#"<a href="/private/contacts">p</a><a href="/public">o</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/public", "<p>hello@open.org</p>", 1).await;

    Mock::given(method("GET"))
        .and(path("/private/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("secret@hidden.org"))
        .expect(0)
        .mount(&server)
        .await;

    let config = CrawlConfig {
        respect_robots: true,
        ..create_test_config(3, 100)
    };
    let engine = CrawlEngine::from_config(config).unwrap();
    let outcome = engine.crawl(&format!("{}/", server.uri())).await;

    assert!(outcome.results.contains(Category::Emails, "hello@open.org"));
    assert!(!outcome.results.contains(Category::Emails, "secret@hidden.org"));
    assert_eq!(outcome.stats.count(PageState::RobotsDenied), 1);
}

#[tokio::test]
async fn test_missing_robots_txt_allows_crawl() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/next">n</a>"#, 1).await;
    mount_page(&server, "/next", "<p>found@site.org</p>", 1).await;

    let config = CrawlConfig {
        respect_robots: true,
        ..create_test_config(2, 100)
    };
    let engine = CrawlEngine::from_config(config).unwrap();
    let outcome = engine.crawl(&format!("{}/", server.uri())).await;

    assert!(outcome.results.contains(Category::Emails, "found@site.org"));
}

#[tokio::test]
async fn test_page_budget_limits_requests() {
    let server = MockServer::start().await;

    let links: String = (0..6)
        .map(|i| format!(r#"<a href="/page{}">p</a>"#, i))
        .collect();
    mount_page(&server, "/", &links, 1).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>leaf</p>", "text/html"))
        .mount(&server)
        .await;

    let config = CrawlConfig {
        concurrency: 4,
        ..create_test_config(3, 3)
    };
    let engine = CrawlEngine::from_config(config).unwrap();
    let outcome = engine.crawl(&format!("{}/", server.uri())).await;

    assert_eq!(requested_paths(&server).await.len(), 3);
    assert_eq!(outcome.results.count(Category::Urls), 6);
}

#[tokio::test]
async fn test_failed_seed_returns_empty_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let engine = CrawlEngine::from_config(create_test_config(2, 100)).unwrap();
    let outcome = engine.crawl(&format!("{}/", server.uri())).await;

    assert!(outcome.results.is_empty());
    assert_eq!(outcome.stats.pages_failed(), 1);

    let json = render_json(&outcome.results).unwrap();
    assert!(json.contains("\"emails\": []"));
    assert!(json.contains("\"urls\": []"));
}

#[tokio::test]
async fn test_results_persist_and_reload() {
    let server = MockServer::start().await;
    mount_company_site(&server).await;

    let engine = CrawlEngine::from_config(create_test_config(2, 100)).unwrap();
    let outcome = engine.crawl(&format!("{}/", server.uri())).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out").join("results.json");
    persist(&outcome.results, &output).unwrap();

    let reloaded = load(&output).unwrap();
    assert_eq!(reloaded, outcome.results);

    let written = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 7);
    for category in Category::ALL {
        assert!(keys.contains(&category.key()));
    }
}
