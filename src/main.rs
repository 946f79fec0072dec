//! doc-mirror main entry point
//!
//! This is the command-line interface for the doc-mirror documentation
//! scraper.

use anyhow::Context;
use clap::Parser;
use doc_mirror::config::{load_config, validate, Config};
use doc_mirror::crawler::Coordinator;
use doc_mirror::output::print_summary;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code reported when the crawl is interrupted with Ctrl-C
const INTERRUPTED_EXIT_CODE: u8 = 130;

/// doc-mirror: mirror a documentation site as plain text
///
/// Crawls every page under a root URL prefix, converts the main content of
/// each page to plain text and writes it to a directory tree that follows
/// the site's paths.
#[derive(Parser, Debug)]
#[command(name = "doc-mirror")]
#[command(version)]
#[command(about = "Mirror a documentation site as plain text", long_about = None)]
struct Cli {
    /// URL the crawl starts from
    #[arg(long, value_name = "URL")]
    start: Option<String>,

    /// Only URLs starting with this prefix are fetched
    #[arg(long, value_name = "URL")]
    root: Option<String>,

    /// Directory that receives the text files
    #[arg(long, value_name = "DIR")]
    outdir: Option<PathBuf>,

    /// Stop after saving this many pages
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Seconds to wait before each request
    #[arg(long, value_name = "SECONDS")]
    delay: Option<f64>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "STRING")]
    user_agent: Option<String>,

    /// TOML file with default settings (flags take precedence)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the effective configuration without crawling
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Applies command-line flags on top of a base configuration
    fn apply_to(self, mut config: Config) -> Config {
        if let Some(start) = self.start {
            config.start_url = start;
        }
        if let Some(root) = self.root {
            config.root = root;
        }
        if let Some(outdir) = self.outdir {
            config.output_dir = outdir;
        }
        if let Some(max_pages) = self.max_pages {
            config.max_pages = max_pages;
        }
        if let Some(delay) = self.delay {
            config.delay = delay;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let base = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    let dry_run = cli.dry_run;
    let mut config = cli.apply_to(base);
    validate(&config).context("invalid configuration")?;

    config.output_dir = absolute_path(&config.output_dir)?;

    if dry_run {
        handle_dry_run(&config);
        return Ok(ExitCode::SUCCESS);
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout only carries the final summary.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("doc_mirror=info,warn"),
            1 => EnvFilter::new("doc_mirror=debug,info"),
            2 => EnvFilter::new("doc_mirror=trace,debug"),
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

fn absolute_path(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    Ok(cwd.join(path))
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== doc-mirror Dry Run ===\n");
    println!("  Start:      {}", config.start_url);
    println!("  Root:       {}", config.root);
    println!("  Output:     {}", config.output_dir.display());
    println!("  Max pages:  {}", config.max_pages);
    println!("  Delay:      {}s", config.delay);
    println!("  Timeout:    {}s", config.timeout);
    println!("  User agent: {}", config.user_agent);
    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
///
/// The crawl is raced against Ctrl-C. An interrupt leaves already written
/// files in place and exits with a distinct code.
async fn handle_crawl(config: Config) -> anyhow::Result<ExitCode> {
    tracing::info!("Start: {}", config.start_url);
    tracing::info!("Root:  {}", config.root);
    tracing::info!("Out:   {}", config.output_dir.display());
    tracing::info!("Max pages: {}", config.max_pages);

    let out_dir = config.output_dir.clone();
    let mut coordinator = Coordinator::new(config)?;

    tokio::select! {
        result = coordinator.run() => {
            let stats = result.context("crawl failed")?;
            print_summary(&stats, &out_dir);
            Ok(ExitCode::SUCCESS)
        }
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted.");
            Ok(ExitCode::from(INTERRUPTED_EXIT_CODE))
        }
    }
}
