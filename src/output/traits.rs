//! Output handler traits and types
//!
//! This module defines the observer interface notified while a crawl runs,
//! and the error type of report writers.

use crate::state::{Address, Page};
use crate::FetchFailure;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Receives per-address events as traversal tasks finish fetching
///
/// Called concurrently from many tasks, in no particular order. With
/// best-effort dedup the same address may be reported more than once.
pub trait CrawlObserver: Send + Sync {
    /// A fetch succeeded
    fn on_found(&self, address: &Address, page: &Page);

    /// A fetch failed
    fn on_failure(&self, address: &Address, failure: &FetchFailure);
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl CrawlObserver for NullObserver {
    fn on_found(&self, _address: &Address, _page: &Page) {}

    fn on_failure(&self, _address: &Address, _failure: &FetchFailure) {}
}
