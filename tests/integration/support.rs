//! Test doubles shared by the integration tests

use async_trait::async_trait;
use ripple_crawl::output::CrawlObserver;
use ripple_crawl::{Address, FetchFailure, Fetcher, Page};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Fetcher serving canned pages from a literal table
///
/// Counts every fetch per address and can delay selected addresses to widen
/// race windows between sibling tasks.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<Address, Page>,
    delays: HashMap<Address, Duration>,
    calls: Mutex<HashMap<Address, usize>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page served under `address`
    pub fn page(mut self, address: &str, content: &str, links: &[&str]) -> Self {
        let links = links.iter().map(|l| Address::from(*l)).collect();
        self.pages
            .insert(Address::from(address), Page::new(content, links));
        self
    }

    pub fn with_delay(mut self, address: &str, delay: Duration) -> Self {
        self.delays.insert(Address::from(address), delay);
        self
    }

    pub fn calls(&self, address: &str) -> usize {
        self.calls.lock().unwrap().get(address).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, address: &Address) -> Result<Page, FetchFailure> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(address.clone())
            .or_insert(0) += 1;

        if let Some(delay) = self.delays.get(address) {
            tokio::time::sleep(*delay).await;
        }

        self.pages
            .get(address)
            .cloned()
            .ok_or_else(|| FetchFailure::not_found(address))
    }
}

/// Observer recording every event it receives
#[derive(Default)]
pub struct RecordingObserver {
    pub found: Mutex<Vec<(Address, String)>>,
    pub failed: Mutex<Vec<(Address, String)>>,
}

impl CrawlObserver for RecordingObserver {
    fn on_found(&self, address: &Address, page: &Page) {
        self.found
            .lock()
            .unwrap()
            .push((address.clone(), page.content.clone()));
    }

    fn on_failure(&self, address: &Address, failure: &FetchFailure) {
        self.failed
            .lock()
            .unwrap()
            .push((address.clone(), failure.to_string()));
    }
}

/// The canned Go tour site map
pub fn golang_fetcher() -> StaticFetcher {
    StaticFetcher::new()
        .page(
            "https://golang.org/",
            "The Go Programming Language",
            &["https://golang.org/pkg/", "https://golang.org/cmd/"],
        )
        .page(
            "https://golang.org/pkg/",
            "Packages",
            &[
                "https://golang.org/",
                "https://golang.org/cmd/",
                "https://golang.org/pkg/fmt/",
                "https://golang.org/pkg/os/",
            ],
        )
        .page(
            "https://golang.org/pkg/fmt/",
            "Package fmt",
            &["https://golang.org/", "https://golang.org/pkg/"],
        )
        .page(
            "https://golang.org/pkg/os/",
            "Package os",
            &["https://golang.org/", "https://golang.org/pkg/"],
        )
}
