//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates:
//! - Claiming URLs from the frontier
//! - Enforcing the root boundary and asset skip list
//! - Fetching, converting and writing pages
//! - Feeding discovered links back into the frontier

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::extract_links;
use crate::extract::html_to_text;
use crate::output::{CrawlStats, PageWriter};
use crate::scope::{normalize_url, should_skip_url, CrawlScope};
use crate::{ConfigError, MirrorError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    scope: CrawlScope,
    frontier: Frontier,
    writer: PageWriter,
    client: Client,
    stats: CrawlStats,
    delay: Duration,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// The start URL is parsed and its fragment removed before it seeds the
    /// frontier. The root goes through the same serialization, so the prefix
    /// test sees both in one form. The output directory is used as given;
    /// callers that want an absolute path resolve it beforehand.
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(MirrorError)` - The start URL, root or delay is invalid, or the
    ///   HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, MirrorError> {
        let start = normalize_url(&config.start_url)?;
        let root = normalize_url(&config.root)?;
        let scope = CrawlScope::new(root.clone());
        let delay = Duration::try_from_secs_f64(config.delay).map_err(|_| {
            ConfigError::Validation(format!(
                "delay must be a non-negative number of seconds, got {}",
                config.delay
            ))
        })?;

        if !scope.contains(&start) {
            tracing::warn!(
                "Start URL {} is outside root {}; nothing will be fetched",
                start,
                scope.root()
            );
        }

        let client = build_http_client(&config.user_agent, config.timeout)?;
        let writer = PageWriter::new(root, config.output_dir.clone());

        Ok(Self {
            frontier: Frontier::new(start),
            scope,
            writer,
            client,
            stats: CrawlStats::default(),
            delay,
            config,
        })
    }

    /// Runs the main crawl loop
    ///
    /// The loop ends when the frontier is empty or `max_pages` pages have
    /// been saved. Fetch failures are logged and counted; filesystem errors
    /// abort the crawl.
    pub async fn run(&mut self) -> Result<CrawlStats, MirrorError> {
        self.writer.prepare()?;

        while !self.frontier.is_empty() && self.stats.saved < self.config.max_pages {
            let Some(url) = self.frontier.claim() else {
                break;
            };
            self.stats.visited = self.frontier.visited_count();

            if !self.scope.contains(&url) {
                tracing::debug!("Outside root, not fetching: {}", url);
                self.stats.out_of_root += 1;
                continue;
            }

            if should_skip_url(&url) {
                tracing::debug!("Skipping asset: {}", url);
                self.stats.skipped += 1;
                continue;
            }

            self.process_url(&url).await?;
        }

        if self.stats.saved >= self.config.max_pages && !self.frontier.is_empty() {
            tracing::info!(
                "Reached max pages ({}); {} URLs left in frontier",
                self.config.max_pages,
                self.frontier.pending()
            );
        }

        Ok(self.stats.clone())
    }

    /// Fetches, converts, writes and expands a single in-scope URL
    async fn process_url(&mut self, url: &str) -> Result<(), MirrorError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let html = match fetch_page(&self.client, url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Fetch failed: {}: {}", url, e);
                self.stats.failed += 1;
                return Ok(());
            }
        };

        let text = html_to_text(&html);
        let path = self.writer.write_page(url, &text)?;

        self.stats.saved += 1;
        tracing::info!(
            "{:4} saved: {}",
            self.stats.saved,
            self.writer.display_path(&path).display()
        );

        self.enqueue_links(&html, url)?;

        Ok(())
    }

    /// Pushes every in-scope, unvisited link found on the page
    fn enqueue_links(&mut self, html: &str, page_url: &str) -> Result<(), MirrorError> {
        let base = Url::parse(page_url)?;

        for link in extract_links(html, &base) {
            if self.frontier.is_visited(&link) || !self.scope.admits(&link) {
                continue;
            }
            tracing::trace!("Queueing {}", link);
            self.frontier.push(link);
        }

        Ok(())
    }
}

/// Runs a complete crawl with the given configuration
///
/// # Example
///
/// ```no_run
/// use doc_mirror::config::load_config;
/// use doc_mirror::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("mirror.toml"))?;
/// let stats = run_crawl(config).await?;
/// println!("saved {} pages", stats.saved);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlStats, MirrorError> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
