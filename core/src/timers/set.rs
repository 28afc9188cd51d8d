//! Per-source timer storage and its sorted materialization.

use std::sync::Arc;

use hashbrown::HashMap;

/// A single countdown timer: opaque id and absolute expiry in epoch seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerEntry {
    pub id: String,
    pub expiry: f64,
}

/// Immutable sorted snapshot of one source's timers.
///
/// Ordered by `(expiry, id)` ascending; the id tie-break keeps display order
/// deterministic when two timers expire at the same instant.
pub type SortedView = Arc<Vec<TimerEntry>>;

/// Unordered id → expiry mapping for one source.
///
/// Keys are unique within the source. The same id appearing on the other
/// source is a different timer; sources are never merged by identity.
#[derive(Debug, Default)]
pub(crate) struct TimerSet {
    timers: HashMap<String, f64>,
}

impl TimerSet {
    /// Insert or overwrite a timer. An update to a known id just moves its
    /// expiry; there is no separate renew path.
    pub fn upsert(&mut self, id: &str, expiry: f64) {
        self.timers.insert(id.to_string(), expiry);
    }

    /// Returns true if the id was present.
    pub fn remove(&mut self, id: &str) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn replace(&mut self, timers: HashMap<String, f64>) {
        self.timers = timers;
    }

    /// Drop entries that expired more than `grace` seconds ago. Entries in
    /// `[now - grace, ∞)` are kept, including recently finished ones.
    /// Returns how many were dropped.
    pub fn prune_stale(&mut self, now: f64, grace: f64) -> usize {
        let before = self.timers.len();
        self.timers.retain(|_, expiry| *expiry > now - grace);
        before - self.timers.len()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Materialize the sorted view.
    pub fn sorted(&self) -> SortedView {
        let mut entries: Vec<TimerEntry> = self
            .timers
            .iter()
            .map(|(id, expiry)| TimerEntry {
                id: id.clone(),
                expiry: *expiry,
            })
            .collect();
        entries.sort_by(|a, b| a.expiry.total_cmp(&b.expiry).then_with(|| a.id.cmp(&b.id)));
        Arc::new(entries)
    }
}
