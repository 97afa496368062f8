//! Recursive fan-out traversal
//!
//! This module handles:
//! - The depth cut-off and dedup check for each visited address
//! - Calling the fetcher, optionally under a deadline
//! - Recording every outcome in the visited registry
//! - Spawning one task per discovered link
//!
//! Every task owns a `WorkUnit`. A parent registers the unit of each child
//! before spawning it and only releases its own unit once the spawn loop has
//! finished, so the tracker never reads zero while work is still pending.

use crate::config::DedupMode;
use crate::crawler::Fetcher;
use crate::output::{CrawlObserver, CrawlStats};
use crate::state::{Address, FetchOutcome, VisitedRegistry, WorkTracker, WorkUnit};
use crate::FetchFailure;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

type TraversalFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Shared handles of a single crawl, cloned into every traversal task
#[derive(Clone)]
pub struct Scheduler {
    registry: Arc<VisitedRegistry>,
    tracker: Arc<WorkTracker>,
    fetcher: Arc<dyn Fetcher>,
    observer: Arc<dyn CrawlObserver>,
    stats: Arc<CrawlStats>,
    dedup: DedupMode,
    fetch_timeout: Option<Duration>,
}

impl Scheduler {
    /// Creates a scheduler with a fresh registry, tracker, and statistics
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        observer: Arc<dyn CrawlObserver>,
        dedup: DedupMode,
        fetch_timeout: Option<Duration>,
    ) -> Self {
        Self {
            registry: Arc::new(VisitedRegistry::new()),
            tracker: WorkTracker::new(),
            fetcher,
            observer,
            stats: Arc::new(CrawlStats::default()),
            dedup,
            fetch_timeout,
        }
    }

    pub fn registry(&self) -> &Arc<VisitedRegistry> {
        &self.registry
    }

    pub fn tracker(&self) -> &Arc<WorkTracker> {
        &self.tracker
    }

    pub fn stats(&self) -> &Arc<CrawlStats> {
        &self.stats
    }

    /// Registers a unit of work for `address` and runs it on a new task
    ///
    /// The unit is counted before the task exists.
    pub fn spawn(&self, address: Address, depth: i32) {
        let unit = self.tracker.register();
        self.stats.record_spawn();
        tracing::debug!("Spawning {} at remaining depth {}", address, depth);
        tokio::spawn(self.clone().visit(address, depth, unit));
    }

    /// Traverses `address` with `depth` levels remaining
    ///
    /// `unit` is released when the returned future completes (or unwinds),
    /// after every child of this address has been registered.
    pub fn visit(self, address: Address, depth: i32, unit: WorkUnit) -> TraversalFuture {
        Box::pin(async move {
            let _unit = unit;

            if depth <= 0 {
                tracing::trace!("Depth exhausted at {}", address);
                self.stats.record_depth_cutoff();
                return;
            }

            if !self.admit(&address) {
                tracing::trace!("Already visited {}", address);
                self.stats.record_duplicate();
                return;
            }

            let outcome = self.fetch(&address).await;
            self.registry.put(address.clone(), outcome.clone());

            match outcome {
                FetchOutcome::Failure(failure) => {
                    tracing::warn!("Fetch failed for {}: {}", address, failure);
                    self.stats.record_failure();
                    self.observer.on_failure(&address, &failure);
                }
                FetchOutcome::Success(page) => {
                    tracing::debug!("Fetched {} ({} links)", address, page.links.len());
                    self.stats.record_success();
                    self.observer.on_found(&address, &page);

                    for link in page.links {
                        self.spawn(link, depth - 1);
                    }
                }
            }
        })
    }

    /// Decides whether this task should fetch `address`
    fn admit(&self, address: &Address) -> bool {
        match self.dedup {
            DedupMode::BestEffort => self.registry.get(address.as_str()).is_none(),
            DedupMode::Exact => self.registry.claim(address),
        }
    }

    async fn fetch(&self, address: &Address) -> FetchOutcome {
        let fetch = self.fetcher.fetch(address);

        let result = match self.fetch_timeout {
            Some(limit) => match tokio::time::timeout(limit, fetch).await {
                Ok(result) => result,
                Err(_) => {
                    self.stats.record_timeout();
                    Err(FetchFailure::timed_out(limit))
                }
            },
            None => fetch.await,
        };

        FetchOutcome::from(result)
    }
}
