//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The breadth-first frontier with its visited set
//! - HTTP fetching (one attempt per URL)
//! - Link extraction
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_page};
pub use frontier::Frontier;
pub use parser::extract_links;
