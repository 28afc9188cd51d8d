//! Half-second display refresh task.
//!
//! One background task repaints the display while any timer is active: it
//! recomputes the active selection, hands remaining times to the renderer,
//! then sleeps to the next half-second wall-clock boundary. The task starts
//! itself on the first timer and exits once the aggregate goes empty.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use crate::display::Renderer;
use crate::timers::{epoch_now, Aggregator};

/// Time until the next half-second wall-clock boundary.
///
/// Anchored to absolute `.0`/`.5` instants rather than "0.5 s after the last
/// wake", so variable render time cannot drift the colon-flash cadence.
pub fn sleep_until_boundary(now: f64) -> Duration {
    let frac = now % 1.0;
    let secs = if frac >= 0.5 { 1.0 - frac } else { 0.5 - frac };
    Duration::from_secs_f64(secs)
}

/// Idle ⇄ Running state machine around the refresh loop.
///
/// At most one loop runs at a time; concurrent change notifications from
/// both sources race on the `running` flag, never on task identity.
pub struct RefreshScheduler {
    aggregator: Arc<Aggregator>,
    renderer: Arc<dyn Renderer>,
    running: AtomicBool,
    shutdown: watch::Receiver<bool>,
}

impl RefreshScheduler {
    pub fn new(
        aggregator: Arc<Aggregator>,
        renderer: Arc<dyn Renderer>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            aggregator,
            renderer,
            running: AtomicBool::new(false),
            shutdown,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Spawn the refresh task unless one is already running.
    pub fn ensure_running(self: Arc<Self>) {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }
        tracing::debug!("refresh scheduler: idle -> running");
        tokio::spawn(async move { self.run().await });
    }

    async fn run(self: Arc<Self>) {
        let mut shutdown = self.shutdown.clone();

        loop {
            if *shutdown.borrow() {
                break;
            }

            // Termination is derived from the aggregate every iteration,
            // not from a counter: staleness moves with the clock even when
            // no events arrive.
            let now = epoch_now();
            let selection = self.aggregator.active_selection(now);
            let Some(primary) = selection.primary else {
                break;
            };

            let primary_remaining = (primary.expiry - now).max(0.0);
            let secondary_remaining = selection.secondary.map(|t| (t.expiry - now).max(0.0));
            self.renderer.render(primary_remaining, secondary_remaining);

            // Re-read the clock: rendering takes time and the boundary is
            // absolute. The wait is interruptible so shutdown never has to
            // ride out the remaining interval.
            tokio::select! {
                _ = tokio::time::sleep(sleep_until_boundary(epoch_now())) => {}
                _ = shutdown.changed() => break,
            }
        }

        self.renderer.clear();
        self.running.store(false, Ordering::SeqCst);
        tracing::debug!("refresh scheduler: running -> idle");

        // An event may have landed between the empty check and the flag
        // store; restart rather than strand a live timer off-screen.
        if !*self.shutdown.borrow()
            && !self.aggregator.active_selection(epoch_now()).is_empty()
        {
            self.ensure_running();
        }
    }
}
