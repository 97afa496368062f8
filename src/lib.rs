//! Ripple-Crawl: a concurrent, depth-bounded crawler
//!
//! This crate recursively fetches pages reachable from a seed address up to a
//! maximum depth. Every discovered link is visited on its own task, a shared
//! visited registry keeps addresses from being fetched twice, and a work
//! tracker tells the driver when all in-flight tasks have finished.
//!
//! Fetching is abstracted behind the [`crawler::Fetcher`] trait.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;

use thiserror::Error;

/// Main error type for Ripple-Crawl operations
#[derive(Debug, Error)]
pub enum RippleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate page address in site map: {0}")]
    DuplicatePage(String),
}

/// The single failure kind a fetch can produce
///
/// A failure only ever ends the traversal of the address it belongs to. It is
/// recorded in the registry like a success so the address is not retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct FetchFailure {
    reason: String,
}

impl FetchFailure {
    /// Creates a failure with a free-form reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The fetcher has no page for this address
    pub fn not_found(address: &state::Address) -> Self {
        Self::new(format!("not found: {}", address))
    }

    /// The fetch did not return within the configured deadline
    pub fn timed_out(limit: std::time::Duration) -> Self {
        Self::new(format!("timed out after {} ms", limit.as_millis()))
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result type alias for Ripple-Crawl operations
pub type Result<T> = std::result::Result<T, RippleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, DedupMode};
pub use crawler::{crawl, Coordinator, CrawlSettings, Fetcher, SiteMapFetcher};
pub use output::CrawlReport;
pub use state::{Address, FetchOutcome, Page, VisitedRegistry, WorkTracker};
