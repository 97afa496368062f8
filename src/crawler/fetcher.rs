//! Fetcher capability and the bundled site-map fetcher
//!
//! The traversal engine never performs I/O itself. It asks a [`Fetcher`] for
//! the content and outgoing links of an address, and the fetcher is free to
//! hit the network, read a fixture, or anything else. Implementations must
//! be safe to call from many tasks at once.

use crate::config::Config;
use crate::state::{Address, Page};
use crate::FetchFailure;
use async_trait::async_trait;
use std::collections::HashMap;

/// Resolves an address to its content and outgoing links
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `address`
    ///
    /// # Returns
    ///
    /// * `Ok(Page)` - Content and the addresses discovered on the page
    /// * `Err(FetchFailure)` - The address could not be resolved
    async fn fetch(&self, address: &Address) -> Result<Page, FetchFailure>;
}

/// Fetcher backed by an in-memory link graph
///
/// Used by the command-line tool to crawl the `[[page]]` tables of a config
/// file. Addresses absent from the map fail with `not found: <address>`.
#[derive(Debug, Clone, Default)]
pub struct SiteMapFetcher {
    pages: HashMap<Address, Page>,
}

impl SiteMapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the site map from the `[[page]]` entries of a config
    pub fn from_config(config: &Config) -> Self {
        config
            .pages
            .iter()
            .map(|entry| {
                let links = entry.links.iter().map(|l| Address::from(l.as_str())).collect();
                (Address::from(entry.address.as_str()), Page::new(entry.content.clone(), links))
            })
            .collect()
    }

    /// Adds or replaces a page
    pub fn insert(&mut self, address: impl Into<Address>, page: Page) {
        self.pages.insert(address.into(), page);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterates the pages, in no particular order
    pub fn pages(&self) -> impl Iterator<Item = (&Address, &Page)> {
        self.pages.iter()
    }
}

impl FromIterator<(Address, Page)> for SiteMapFetcher {
    fn from_iter<I: IntoIterator<Item = (Address, Page)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl Fetcher for SiteMapFetcher {
    async fn fetch(&self, address: &Address) -> Result<Page, FetchFailure> {
        self.pages
            .get(address)
            .cloned()
            .ok_or_else(|| FetchFailure::not_found(address))
    }
}
