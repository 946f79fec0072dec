//! Configuration module for doc-mirror
//!
//! Configuration comes from built-in defaults, an optional TOML file, and
//! command-line overrides, in increasing order of precedence.
//!
//! # Example
//!
//! ```no_run
//! use doc_mirror::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("mirror.toml")).unwrap();
//! println!("Will save at most {} pages", config.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{default_user_agent, Config};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
