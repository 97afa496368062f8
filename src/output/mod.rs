//! Output module for reporting crawl progress and results
//!
//! This module handles:
//! - Per-fetch events through the `CrawlObserver` trait
//! - The final report built from the visited registry
//! - Crawl statistics and the optional markdown summary

mod console;
mod markdown;
mod report;
pub mod stats;
mod traits;

pub use console::ConsoleReporter;
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use report::CrawlReport;
pub use stats::{print_statistics, CrawlStats, CrawlStatsSnapshot};
pub use traits::{CrawlObserver, NullObserver, OutputError, OutputResult};
