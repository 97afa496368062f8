//! Crawler coordinator - top-level crawl driver
//!
//! The coordinator owns one crawl:
//! - Registers the root unit of work and traverses the seed
//! - Waits on the work tracker until every spawned task has finished
//! - Collects the visited registry into a `CrawlReport`

use crate::config::{validate, Config, CrawlerConfig, DedupMode};
use crate::crawler::scheduler::Scheduler;
use crate::crawler::{Fetcher, SiteMapFetcher};
use crate::output::{
    generate_markdown_summary, ConsoleReporter, CrawlObserver, CrawlReport, NullObserver,
};
use crate::state::Address;
use crate::Result;
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Settings of a single crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSettings {
    /// Address the crawl starts from
    pub seed: Address,

    /// Remaining depth given to the seed; 0 or less fetches nothing
    pub max_depth: i32,

    /// Dedup strategy for concurrently discovered addresses
    pub dedup: DedupMode,

    /// Optional per-fetch deadline
    pub fetch_timeout: Option<Duration>,
}

impl CrawlSettings {
    /// Best-effort dedup and no deadline
    pub fn new(seed: impl Into<Address>, max_depth: i32) -> Self {
        Self {
            seed: seed.into(),
            max_depth,
            dedup: DedupMode::default(),
            fetch_timeout: None,
        }
    }

    pub fn with_dedup(mut self, dedup: DedupMode) -> Self {
        self.dedup = dedup;
        self
    }

    pub fn with_fetch_timeout(mut self, limit: Duration) -> Self {
        self.fetch_timeout = Some(limit);
        self
    }

    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self {
            seed: Address::from(config.seed.as_str()),
            max_depth: config.max_depth,
            dedup: config.dedup,
            fetch_timeout: config.fetch_timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Main crawler coordinator structure
pub struct Coordinator {
    settings: CrawlSettings,
    fetcher: Arc<dyn Fetcher>,
    observer: Arc<dyn CrawlObserver>,
}

impl Coordinator {
    /// Creates a coordinator that reports no per-page events
    pub fn new(settings: CrawlSettings, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            settings,
            fetcher,
            observer: Arc::new(NullObserver),
        }
    }

    /// Replaces the observer notified of every fetch
    pub fn with_observer(mut self, observer: Arc<dyn CrawlObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Runs the crawl to completion
    ///
    /// Returns once no traversal task is running and none will be spawned.
    /// Per-address failures are part of the report, never an error.
    pub async fn run(&self) -> CrawlReport {
        let settings = &self.settings;
        tracing::info!(
            "Starting crawl from {} (max depth {}, dedup {:?})",
            settings.seed,
            settings.max_depth,
            settings.dedup
        );
        if settings.fetch_timeout.is_none() {
            tracing::debug!("No fetch timeout configured; a stalled fetch stalls the crawl");
        }

        let started_at = Utc::now();
        let scheduler = Scheduler::new(
            Arc::clone(&self.fetcher),
            Arc::clone(&self.observer),
            settings.dedup,
            settings.fetch_timeout,
        );

        let root = scheduler.tracker().register();
        scheduler
            .clone()
            .visit(settings.seed.clone(), settings.max_depth, root)
            .await;
        scheduler.tracker().wait_idle().await;

        let finished_at = Utc::now();
        let stats = scheduler.stats().snapshot();
        let entries = scheduler.registry().snapshot();

        tracing::info!(
            "Crawl finished: {} addresses recorded, {} fetches, {} duplicates skipped",
            entries.len(),
            stats.fetches(),
            stats.duplicates_skipped
        );

        CrawlReport::new(settings.clone(), started_at, finished_at, entries, stats)
    }
}

/// Crawls `seed` to `max_depth` with default settings
pub async fn crawl(
    seed: impl Into<Address>,
    max_depth: i32,
    fetcher: Arc<dyn Fetcher>,
) -> CrawlReport {
    Coordinator::new(CrawlSettings::new(seed, max_depth), fetcher)
        .run()
        .await
}

/// Runs a crawl described by a config file over its `[[page]]` site map
///
/// The config is validated again first, since callers may have changed it
/// after loading. Found pages and failures are printed as they happen, and
/// the markdown summary is written when `output.summary-path` is set.
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed (individual fetches may have failed)
/// * `Err(RippleError)` - Invalid config or the summary could not be written
pub async fn run_crawl(config: &Config) -> Result<CrawlReport> {
    validate(config)?;

    let fetcher = SiteMapFetcher::from_config(config);
    if fetcher.is_empty() {
        tracing::warn!("Site map has no pages; the seed fetch will fail");
    } else {
        tracing::info!("Site map holds {} pages", fetcher.len());
    }

    let report = Coordinator::new(CrawlSettings::from_config(&config.crawler), Arc::new(fetcher))
        .with_observer(Arc::new(ConsoleReporter))
        .run()
        .await;

    if let Some(path) = &config.output.summary_path {
        generate_markdown_summary(&report, Path::new(path))?;
        tracing::info!("Summary written to: {}", path);
    }

    Ok(report)
}
