//! One independently-fed timer source.

use std::sync::{Arc, Mutex, RwLock};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::set::{SortedView, TimerSet};

/// Identifies which external feed a timer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    /// Short-range wireless gadget link. Incremental deltas, lags the bus
    /// feed by roughly a second.
    Gadget,
    /// Message-bus feed. Full snapshots, lower latency.
    Bus,
}

/// Owns one source's [`TimerSet`] and publishes an immutable sorted view.
///
/// Every mutation recomputes the sort and swaps in a fresh view before
/// returning, so a reader never observes a view that disagrees with the set.
/// The set itself is only ever mutated through this adapter.
#[derive(Debug)]
pub struct SourceAdapter {
    id: SourceId,
    set: Mutex<TimerSet>,
    view: RwLock<SortedView>,
}

impl SourceAdapter {
    pub fn new(id: SourceId) -> Self {
        Self {
            id,
            set: Mutex::new(TimerSet::default()),
            view: RwLock::new(Arc::new(Vec::new())),
        }
    }

    pub fn source(&self) -> SourceId {
        self.id
    }

    /// Set or overwrite a timer's expiry.
    pub fn upsert(&self, timer_id: &str, expiry: f64) {
        let mut set = self.lock_set();
        set.upsert(timer_id, expiry);
        self.publish(&set);
    }

    /// Remove a timer. Removing an unknown id is a no-op; returns whether
    /// anything was removed.
    pub fn remove(&self, timer_id: &str) -> bool {
        let mut set = self.lock_set();
        let removed = set.remove(timer_id);
        if removed {
            self.publish(&set);
        }
        removed
    }

    /// Wipe the set. Called when the source's external link drops, and by
    /// the aggregator's cross-clear policy.
    pub fn clear_all(&self) {
        let mut set = self.lock_set();
        if !set.is_empty() {
            set.clear();
            self.publish(&set);
        }
    }

    /// Wholesale replace the set with a fresh snapshot.
    pub fn replace_all(&self, timers: HashMap<String, f64>) {
        let mut set = self.lock_set();
        set.replace(timers);
        self.publish(&set);
    }

    /// Drop entries expired longer ago than `grace` seconds. Returns how
    /// many were dropped.
    pub fn prune_stale(&self, now: f64, grace: f64) -> usize {
        let mut set = self.lock_set();
        let dropped = set.prune_stale(now, grace);
        if dropped > 0 {
            tracing::debug!(source = ?self.id, dropped, "pruned stale timers");
            self.publish(&set);
        }
        dropped
    }

    /// The latest published sorted snapshot.
    pub fn sorted_view(&self) -> SortedView {
        Arc::clone(&self.view.read().expect("sorted view lock poisoned"))
    }

    pub fn is_empty(&self) -> bool {
        self.lock_set().is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock_set().len()
    }

    fn lock_set(&self) -> std::sync::MutexGuard<'_, TimerSet> {
        self.set.lock().expect("timer set lock poisoned")
    }

    // Called with the set lock held so the published view can never lag a
    // concurrent mutation.
    fn publish(&self, set: &TimerSet) {
        *self.view.write().expect("sorted view lock poisoned") = set.sorted();
    }
}
