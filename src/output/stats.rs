//! Statistics collected while a crawl runs
//!
//! Counters are bumped from every traversal task, so they are plain atomics
//! read once into a `CrawlStatsSnapshot` after the crawl completes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live crawl counters shared by all traversal tasks
#[derive(Debug, Default)]
pub struct CrawlStats {
    tasks_spawned: AtomicU64,
    successes: AtomicU64,
    failures: AtomicU64,
    duplicates_skipped: AtomicU64,
    depth_cutoffs: AtomicU64,
    timeouts: AtomicU64,
}

impl CrawlStats {
    pub fn record_spawn(&self) {
        self.tasks_spawned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_duplicate(&self) {
        self.duplicates_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_depth_cutoff(&self) {
        self.depth_cutoffs.fetch_add(1, Ordering::Relaxed);
    }

    /// Timeouts are also counted as failures by the caller
    pub fn record_timeout(&self) {
        self.timeouts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CrawlStatsSnapshot {
        CrawlStatsSnapshot {
            tasks_spawned: self.tasks_spawned.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            duplicates_skipped: self.duplicates_skipped.load(Ordering::Relaxed),
            depth_cutoffs: self.depth_cutoffs.load(Ordering::Relaxed),
            timeouts: self.timeouts.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the crawl counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStatsSnapshot {
    /// Traversal tasks spawned for discovered links (the seed is not counted)
    pub tasks_spawned: u64,

    /// Fetches that returned a page
    pub successes: u64,

    /// Fetches that failed, timeouts included
    pub failures: u64,

    /// Tasks that stopped because the address was already visited
    pub duplicates_skipped: u64,

    /// Tasks that stopped because no depth remained
    pub depth_cutoffs: u64,

    /// Fetches abandoned at the configured deadline
    pub timeouts: u64,
}

impl CrawlStatsSnapshot {
    /// Total fetch attempts, duplicates of the same address included
    pub fn fetches(&self) -> u64 {
        self.successes + self.failures
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatsSnapshot) {
    println!("=== Crawl Statistics ===\n");

    println!("Tasks:");
    println!("  Spawned: {}", stats.tasks_spawned);
    println!("  Stopped at depth limit: {}", stats.depth_cutoffs);
    println!("  Skipped as already visited: {}", stats.duplicates_skipped);
    println!();

    println!("Fetches:");
    println!("  Total: {}", stats.fetches());
    println!("  Succeeded: {}", stats.successes);
    println!("  Failed: {}", stats.failures);
    if stats.timeouts > 0 {
        println!("  Timed out: {}", stats.timeouts);
    }
}
