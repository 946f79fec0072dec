//! Breadth-first work queue with a visited set
//!
//! The frontier owns both halves of the crawl state so the coordinator can be
//! tested in isolation and a parallel variant can swap in a shared
//! implementation with the same claim semantics.

use std::collections::{HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting for a fetch attempt, oldest first
    queue: VecDeque<String>,

    /// Every URL that has been claimed during this run
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier seeded with the start URL
    pub fn new(start: impl Into<String>) -> Self {
        let mut frontier = Self::default();
        frontier.queue.push_back(start.into());
        frontier
    }

    /// Claims the next unvisited URL
    ///
    /// Entries that were already visited are dropped without being returned.
    /// The returned URL is marked visited before this method returns, so it
    /// is handed out at most once.
    pub fn claim(&mut self) -> Option<String> {
        while let Some(url) = self.queue.pop_front() {
            if self.visited.insert(url.clone()) {
                return Some(url);
            }
        }
        None
    }

    /// Appends a URL unless it has already been visited
    ///
    /// Returns true if the URL was queued. A URL may sit in the queue more
    /// than once; [`Frontier::claim`] discards the later copies.
    pub fn push(&mut self, url: String) -> bool {
        if self.visited.contains(&url) {
            return false;
        }
        self.queue.push_back(url);
        true
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
