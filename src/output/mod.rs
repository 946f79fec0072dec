//! Output module for the mirrored text tree
//!
//! This module handles:
//! - Mapping page URLs to file paths under the output directory
//! - Writing converted pages to disk
//! - Summarizing a finished crawl

mod path;
pub mod stats;
mod writer;

pub use path::{url_to_path, DEFAULT_DOCUMENT, TEXT_EXTENSION};
pub use stats::{print_summary, CrawlStats};
pub use writer::PageWriter;
