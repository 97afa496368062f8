//! Crawler module for concurrent, depth-bounded traversal
//!
//! This module contains the core crawling logic, including:
//! - The `Fetcher` capability the traversal depends on
//! - Recursive fan-out of one task per discovered link
//! - Overall crawl coordination and completion tracking

mod coordinator;
mod fetcher;
mod scheduler;

pub use coordinator::{crawl, run_crawl, Coordinator, CrawlSettings};
pub use fetcher::{Fetcher, SiteMapFetcher};
pub use scheduler::Scheduler;
