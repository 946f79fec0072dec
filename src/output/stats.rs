//! Counters reported at the end of a crawl

use std::path::Path;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// URLs taken from the frontier for the first time
    pub visited: usize,

    /// Pages converted and written to disk
    pub saved: usize,

    /// Pages whose fetch failed
    pub failed: usize,

    /// URLs discarded because they lie outside the root
    pub out_of_root: usize,

    /// URLs discarded by the asset skip list
    pub skipped: usize,
}

impl CrawlStats {
    /// The one-line completion message
    pub fn summary_line(&self, out_dir: &Path) -> String {
        format!(
            "Done. Visited {} pages, saved {} text files in {}",
            self.visited,
            self.saved,
            out_dir.display()
        )
    }
}

/// Prints the completion summary to stdout
pub fn print_summary(stats: &CrawlStats, out_dir: &Path) {
    println!("{}", stats.summary_line(out_dir));

    if stats.failed > 0 {
        println!("  Failed fetches: {}", stats.failed);
    }
}
