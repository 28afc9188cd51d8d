//! Precedence and staleness policy across the two sources.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::set::SortedView;
use super::source::{SourceAdapter, SourceId};
use super::TimerEntry;

/// Grace window past expiry during which a finished timer is still shown
/// (it renders as 00:00 instead of vanishing abruptly).
pub const DEFAULT_STALE_GRACE_SECS: f64 = 15.0;

/// The ≤2 timers currently chosen for display: soonest-expiring first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveSelection {
    pub primary: Option<TimerEntry>,
    pub secondary: Option<TimerEntry>,
}

impl ActiveSelection {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }

    fn from_view(view: &SortedView) -> Self {
        Self {
            primary: view.first().cloned(),
            secondary: view.get(1).cloned(),
        }
    }
}

/// Combines the two sources under strict precedence.
///
/// The bus feed arrives roughly a second ahead of the gadget feed, so it is
/// authoritative whenever its filtered view is non-empty; the gadget feed is
/// only a fallback. The two sets are never merged by union.
#[derive(Debug)]
pub struct Aggregator {
    gadget: Arc<SourceAdapter>,
    bus: Arc<SourceAdapter>,
    stale_grace_secs: f64,
    /// Whether the bus view was non-empty the last time the policy ran.
    /// Drives the cross-clear on the non-empty → empty transition.
    bus_was_nonempty: AtomicBool,
}

impl Aggregator {
    pub fn new(stale_grace_secs: f64) -> Self {
        Self {
            gadget: Arc::new(SourceAdapter::new(SourceId::Gadget)),
            bus: Arc::new(SourceAdapter::new(SourceId::Bus)),
            stale_grace_secs,
            bus_was_nonempty: AtomicBool::new(false),
        }
    }

    pub fn adapter(&self, source: SourceId) -> &Arc<SourceAdapter> {
        match source {
            SourceId::Gadget => &self.gadget,
            SourceId::Bus => &self.bus,
        }
    }

    pub fn stale_grace_secs(&self) -> f64 {
        self.stale_grace_secs
    }

    /// Recompute the active list for wall-clock `now`.
    ///
    /// Ordered policy:
    /// 1. Prune the bus set, and if its view just went from non-empty to
    ///    empty, wipe the gadget set too. The gadget feed echoes the same
    ///    deletions about a second later; without the cross-clear a finished
    ///    timer would linger at 00:00 for that window.
    /// 2. If the bus view is non-empty, select from it.
    /// 3. Otherwise prune the gadget set and select from its view.
    pub fn active_selection(&self, now: f64) -> ActiveSelection {
        self.bus.prune_stale(now, self.stale_grace_secs);
        let bus_view = self.bus.sorted_view();

        let was_nonempty = self
            .bus_was_nonempty
            .swap(!bus_view.is_empty(), Ordering::SeqCst);
        if bus_view.is_empty() && was_nonempty {
            tracing::debug!("bus timers gone, cross-clearing gadget set");
            self.gadget.clear_all();
        }

        if !bus_view.is_empty() {
            return ActiveSelection::from_view(&bus_view);
        }

        self.gadget.prune_stale(now, self.stale_grace_secs);
        ActiveSelection::from_view(&self.gadget.sorted_view())
    }
}
