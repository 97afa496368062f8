//! Outstanding-work tracking for traversal tasks
//!
//! `WorkTracker` is a wait-group: every traversal task holds one `WorkUnit`,
//! and the driver waits until no unit is alive. Units are registered by the
//! parent before the child task is spawned, and released when the owning
//! task drops them, so the count cannot reach zero while a child is still
//! about to start.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Counter of in-flight traversal tasks with an async zero barrier
#[derive(Debug, Default)]
pub struct WorkTracker {
    /// Units registered but not yet released
    outstanding: AtomicUsize,

    /// Woken every time the count drops to zero
    idle: Notify,
}

impl WorkTracker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers one unit of outstanding work
    ///
    /// The count is incremented before this returns. Dropping the returned
    /// unit decrements it.
    pub fn register(self: &Arc<Self>) -> WorkUnit {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        WorkUnit {
            tracker: Arc::clone(self),
        }
    }

    /// Number of units currently registered
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    /// Waits until the outstanding count is zero
    ///
    /// Returns immediately if nothing is registered.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            // Enable before checking the count so a release between the
            // check and the await still wakes us.
            notified.as_mut().enable();

            if self.outstanding() == 0 {
                return;
            }
            notified.await;
        }
    }

    fn release(&self) {
        let previous = self.outstanding.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "work unit released more than once");
        if previous == 1 {
            self.idle.notify_waiters();
        }
    }
}

/// One registered unit of outstanding work, released on drop
#[must_use = "dropping a WorkUnit immediately releases it"]
#[derive(Debug)]
pub struct WorkUnit {
    tracker: Arc<WorkTracker>,
}

impl Drop for WorkUnit {
    fn drop(&mut self) {
        self.tracker.release();
    }
}
