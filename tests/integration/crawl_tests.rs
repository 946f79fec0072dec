//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small documentation site and run the
//! full crawl cycle end-to-end into a temporary directory.

use doc_mirror::config::Config;
use doc_mirror::crawler::{run_crawl, Coordinator};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INDEX_PAGE: &str = r##"<html><head><title>Docs</title></head><body>
<nav><a href="index.html">Home</a> <a href="guide/intro.html">Guide</a></nav>
<main>
<h1>Documentation</h1>
<p>Start with the <a href="guide/intro.html#welcome">guide</a>.</p>
<ul>
<li><a href="api/Foo.html#method-summary">Foo</a></li>
<li><a href="missing.html">Missing</a></li>
</ul>
<img src="logo.png"><a href="logo.png">Logo</a>
<a href="/other/page.html">Elsewhere on the host</a>
<a href="https://external.invalid/page.html">External</a>
<a href="mailto:docs@example.com">Mail</a>
</main>
</body></html>"##;

const INTRO_PAGE: &str = r##"<html><body>
<nav><a href="../index.html">Home</a></nav>
<main><h1>Intro</h1><p>Welcome to the <b>guide</b>.</p>
<a href="../api/Foo.html">Foo</a></main>
</body></html>"##;

const FOO_PAGE: &str = r##"<html><body>
<div class="topNav"><a href="../index.html">Overview</a></div>
<div class="contentContainer">
<h2>Method Summary</h2>
<table>
<tr><th>Type</th><th>Method</th></tr>
<tr><td><code>int</code></td><td><code>getX()</code></td></tr>
</table>
</div>
</body></html>"##;

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

/// Mounts the sample site; `page_expectations` controls how often each HTML
/// page must be requested
async fn mount_site(server: &MockServer, page_expectations: Option<(u64, u64, u64)>) {
    let (index, intro, foo) = match page_expectations {
        Some(counts) => counts,
        None => (1, 1, 1),
    };

    Mock::given(method("GET"))
        .and(path("/docs/index.html"))
        .respond_with(html(INDEX_PAGE))
        .expect(index)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/docs/guide/intro.html"))
        .respond_with(html(INTRO_PAGE))
        .expect(intro)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/docs/api/Foo.html"))
        .respond_with(html(FOO_PAGE))
        .expect(foo)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/docs/missing.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;

    // Never requested: an asset under the root and a page outside it
    Mock::given(method("GET"))
        .and(path("/docs/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, 0x50, 0x4e, 0x47]))
        .expect(0)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/other/page.html"))
        .respond_with(html("<p>outside</p>"))
        .expect(0)
        .mount(server)
        .await;
}

fn create_test_config(base_url: &str, out_dir: &Path) -> Config {
    Config {
        start_url: format!("{}/docs/index.html", base_url),
        root: format!("{}/docs/", base_url),
        output_dir: out_dir.to_path_buf(),
        max_pages: 500,
        delay: 0.0,
        timeout: 5,
        user_agent: "TestMirror/1.0".to_string(),
    }
}

#[tokio::test]
async fn test_full_crawl_mirrors_site() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server, None).await;

    let out = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), out.path());

    let stats = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(stats.saved, 3);
    assert_eq!(stats.failed, 1);

    let index = fs::read_to_string(out.path().join("index.txt")).unwrap();
    assert!(index.starts_with("# Documentation\n\nStart with the guide.\n"));
    assert!(index.contains("- Foo\n"));
    assert!(!index.contains("Home"));

    let intro = fs::read_to_string(out.path().join("guide/intro.txt")).unwrap();
    assert_eq!(intro, "# Intro\n\nWelcome to the guide.\n\nFoo\n");

    let foo = fs::read_to_string(out.path().join("api/Foo.txt")).unwrap();
    assert_eq!(foo, "## Method Summary\n\nType | Method\nint | getX()\n");

    assert!(!out.path().join("missing.txt").exists());
    assert!(!out.path().join("logo.png.txt").exists());
}

#[tokio::test]
async fn test_max_pages_stops_fetching() {
    let mock_server = MockServer::start().await;
    // Only the start page may be requested
    mount_site(&mock_server, Some((1, 0, 0))).await;

    let out = TempDir::new().unwrap();
    let mut config = create_test_config(&mock_server.uri(), out.path());
    config.max_pages = 1;

    let mut coordinator = Coordinator::new(config).unwrap();
    let stats = coordinator.run().await.expect("Crawl failed");

    assert_eq!(stats.saved, 1);
    assert_eq!(stats.visited, 1);
    assert!(out.path().join("index.txt").exists());
    assert!(!out.path().join("guide").exists());
}

#[tokio::test]
async fn test_fetch_failure_does_not_abort() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/docs/index.html"))
        .respond_with(html(
            r#"<main><a href="broken.html">Broken</a><a href="ok.html">Ok</a></main>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/docs/broken.html"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/docs/ok.html"))
        .respond_with(html("<main><p>fine</p></main>"))
        .mount(&mock_server)
        .await;

    let out = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), out.path());
    let stats = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(stats.saved, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.visited, 3);
    assert_eq!(
        fs::read_to_string(out.path().join("ok.txt")).unwrap(),
        "fine\n"
    );
}

#[tokio::test]
async fn test_repeated_crawl_is_byte_identical() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server, Some((2, 2, 2))).await;

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    run_crawl(create_test_config(&mock_server.uri(), first.path()))
        .await
        .expect("First crawl failed");
    run_crawl(create_test_config(&mock_server.uri(), second.path()))
        .await
        .expect("Second crawl failed");

    for rel in ["index.txt", "guide/intro.txt", "api/Foo.txt"] {
        let a = fs::read(first.path().join(rel)).unwrap();
        let b = fs::read(second.path().join(rel)).unwrap();
        assert_eq!(a, b, "{} differs between runs", rel);
    }
}

#[tokio::test]
async fn test_delay_is_applied_between_requests() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server, None).await;

    let out = TempDir::new().unwrap();
    let mut config = create_test_config(&mock_server.uri(), out.path());
    config.delay = 0.05;

    let started = std::time::Instant::now();
    let stats = run_crawl(config).await.expect("Crawl failed");

    // One pause per fetch attempt, including the failed one
    let attempts = (stats.saved + stats.failed) as u32;
    assert!(started.elapsed() >= std::time::Duration::from_millis(50) * attempts);
}

#[tokio::test]
async fn test_root_spelling_does_not_affect_scope() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server, None).await;

    let out = TempDir::new().unwrap();
    let base = mock_server.uri().replacen("http://", "HTTP://", 1);
    let config = create_test_config(&base, out.path());

    let stats = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(stats.out_of_root, 0);
    assert_eq!(stats.saved, 3);
    assert!(out.path().join("api/Foo.txt").exists());
}
