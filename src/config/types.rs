use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_START: &str =
    "https://releases.battlecode.org/javadoc/battlecode24/3.0.5/index.html";
pub const DEFAULT_ROOT: &str = "https://releases.battlecode.org/javadoc/battlecode24/3.0.5/";
pub const DEFAULT_OUTPUT_DIR: &str = "battlecode24_javadoc_3.0.5_txt";
pub const DEFAULT_MAX_PAGES: usize = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for doc-mirror
///
/// Every key is optional in the TOML file; missing keys take the built-in
/// defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// First URL placed in the frontier
    #[serde(rename = "start-url", default = "default_start")]
    pub start_url: String,

    /// Crawl boundary: only URLs starting with this string are fetched
    #[serde(default = "default_root")]
    pub root: String,

    /// Directory that receives the mirrored text files
    #[serde(rename = "output-dir", default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Stop after this many pages have been saved
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,

    /// Pause before each request (seconds)
    #[serde(default)]
    pub delay: f64,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_url: default_start(),
            root: default_root(),
            output_dir: default_output_dir(),
            max_pages: default_max_pages(),
            delay: 0.0,
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Browser-like identifier; some documentation hosts reject bare clients
pub fn default_user_agent() -> String {
    format!(
        "Mozilla/5.0 (compatible; doc-mirror/{})",
        env!("CARGO_PKG_VERSION")
    )
}
