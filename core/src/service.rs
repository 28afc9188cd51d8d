//! Wires the source adapters, the aggregator, and the refresh scheduler.

use std::sync::Arc;

use hashbrown::HashMap;
use tokio::sync::watch;

use crate::display::Renderer;
use crate::events::{parse_expiry, SourceEvent};
use crate::schedule::RefreshScheduler;
use crate::timers::{epoch_now, Aggregator, SourceId};

/// Top-level timer display service.
///
/// Transports hand decoded events to [`handle_event`](Self::handle_event)
/// from their own delivery contexts; the service mutates the right adapter,
/// re-runs the aggregation policy, and wakes the refresh loop when there is
/// something to show. Must live inside a tokio runtime.
pub struct TimerService {
    aggregator: Arc<Aggregator>,
    scheduler: Arc<RefreshScheduler>,
    shutdown_tx: watch::Sender<bool>,
}

impl TimerService {
    pub fn new(renderer: Arc<dyn Renderer>, stale_grace_secs: f64) -> Self {
        let aggregator = Arc::new(Aggregator::new(stale_grace_secs));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let scheduler = Arc::new(RefreshScheduler::new(
            Arc::clone(&aggregator),
            renderer,
            shutdown_rx,
        ));
        Self {
            aggregator,
            scheduler,
            shutdown_tx,
        }
    }

    pub fn aggregator(&self) -> &Arc<Aggregator> {
        &self.aggregator
    }

    pub fn scheduler(&self) -> &Arc<RefreshScheduler> {
        &self.scheduler
    }

    /// Apply one decoded event from a feed.
    pub fn handle_event(&self, source: SourceId, event: SourceEvent) {
        let adapter = self.aggregator.adapter(source);
        match event {
            SourceEvent::Set { id, expiry } => {
                if expiry <= 0.0 {
                    tracing::info!(?source, %id, "ignoring timer set with expiry in the past");
                    return;
                }
                tracing::info!(?source, %id, expiry, "timer set");
                adapter.upsert(&id, expiry);
            }
            SourceEvent::Delete { id } => {
                tracing::info!(?source, %id, "timer delete");
                adapter.remove(&id);
            }
            SourceEvent::Disconnected => {
                tracing::info!(?source, "source disconnected, clearing its timers");
                adapter.clear_all();
            }
            SourceEvent::ReplaceAll { timers } => {
                // Build the full map first so a bad record never leaves the
                // set partially replaced.
                let mut snapshot = HashMap::with_capacity(timers.len());
                for record in timers {
                    match parse_expiry(&record.expire_time) {
                        Ok(expiry) => {
                            tracing::info!(id = %record.id, expiry, "snapshot timer");
                            snapshot.insert(record.id, expiry);
                        }
                        Err(err) => {
                            tracing::warn!(
                                id = %record.id,
                                error = %err,
                                "dropping timer with unparseable expiry"
                            );
                        }
                    }
                }
                adapter.replace_all(snapshot);
            }
        }
        self.timers_changed();
    }

    /// One or more timers changed on some source: re-run the policy and
    /// start the refresh loop if the active list is non-empty. The loop
    /// stops itself once the aggregate drains.
    fn timers_changed(&self) {
        let selection = self.aggregator.active_selection(epoch_now());
        if !selection.is_empty() {
            Arc::clone(&self.scheduler).ensure_running();
        }
    }

    /// Wake the refresh loop immediately and let it exit; the loop clears
    /// the display on the way out. Nothing is persisted.
    pub fn shutdown(&self) {
        tracing::info!("timer service shutting down");
        let _ = self.shutdown_tx.send(true);
    }
}
