//! Crawl boundary checks for doc-mirror
//!
//! This module decides which URLs the crawler may fetch: the root-prefix
//! test, the asset skip list, and fragment-free link resolution.

mod normalize;
mod skip;

pub use normalize::{normalize_url, resolve_link};
pub use skip::{should_skip_url, SKIP_EXTENSIONS};

/// The set of URLs eligible for fetching during one run
///
/// A URL is in scope when it starts with the root string exactly and does
/// not match the skip list. The comparison is textual, so the root must be
/// serialized the same way as the candidate URLs (see [`normalize_url`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlScope {
    root: String,
}

impl CrawlScope {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns true if the URL lies under the root prefix
    pub fn contains(&self, url: &str) -> bool {
        url.starts_with(&self.root)
    }

    /// Returns true if the URL lies under the root and is not an asset
    pub fn admits(&self, url: &str) -> bool {
        self.contains(url) && !should_skip_url(url)
    }
}
