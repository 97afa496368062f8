//! Visited registry shared by all traversal tasks
//!
//! The registry doubles as the dedup gate and the memoization cache of the
//! crawl. A single mutex guards the whole map, so every operation is
//! serialized against every other one.

use crate::state::{Address, FetchOutcome};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct RegistryInner {
    /// Recorded outcomes, one per address
    entries: HashMap<Address, FetchOutcome>,

    /// Addresses reserved by `claim` whose outcome is not recorded yet
    claimed: HashSet<Address>,
}

/// Mutex-guarded map from visited address to fetch outcome
///
/// `get` followed by `put` is not atomic. Two tasks that discover the same
/// address at the same time can both see it as missing and both fetch it;
/// the later `put` then replaces the earlier outcome. Callers that need
/// at-most-once fetching use [`VisitedRegistry::claim`] instead of `get`.
#[derive(Debug, Default)]
pub struct VisitedRegistry {
    inner: Mutex<RegistryInner>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a single insert, so a panic while holding the lock
    // cannot leave the map half-updated.
    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Associates `outcome` with `address`, replacing any previous outcome
    pub fn put(&self, address: Address, outcome: FetchOutcome) {
        let mut inner = self.lock();
        inner.claimed.remove(&address);
        inner.entries.insert(address, outcome);
    }

    /// Returns the recorded outcome, or `None` if the address was never put
    pub fn get(&self, address: &str) -> Option<FetchOutcome> {
        self.lock().entries.get(address).cloned()
    }

    /// Atomically reserves `address` for the caller
    ///
    /// Returns `false` if the address already has an outcome or another caller
    /// holds the reservation. The reservation is released by the matching
    /// `put`.
    pub fn claim(&self, address: &Address) -> bool {
        let mut inner = self.lock();
        if inner.entries.contains_key(address) || inner.claimed.contains(address) {
            return false;
        }
        inner.claimed.insert(address.clone());
        true
    }

    pub fn contains(&self, address: &str) -> bool {
        self.lock().entries.contains_key(address)
    }

    /// Number of recorded outcomes (reservations are not counted)
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies every recorded entry, in no particular order
    pub fn snapshot(&self) -> Vec<(Address, FetchOutcome)> {
        self.lock()
            .entries
            .iter()
            .map(|(address, outcome)| (address.clone(), outcome.clone()))
            .collect()
    }
}
