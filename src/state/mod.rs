//! State module for tracking crawl progress
//!
//! This module provides the state shared by every traversal task of a crawl.
//!
//! # Components
//!
//! - `Address`: The opaque key identifying a crawlable page
//! - `FetchOutcome`: The recorded result of fetching one address
//! - `VisitedRegistry`: Mutex-guarded map of visited addresses to their outcomes
//! - `WorkTracker`: Wait-group style counter of outstanding traversal tasks

mod address;
mod outcome;
mod registry;
mod tracker;

// Re-export main types
pub use address::Address;
pub use outcome::{FetchOutcome, Page};
pub use registry::VisitedRegistry;
pub use tracker::{WorkTracker, WorkUnit};
