//! Timer aggregation across two independently-fed sources.
//!
//! Two external feeds deliver countdown timers with different latency
//! profiles. Each feed owns a [`SourceAdapter`] that keeps its timers sorted
//! by expiry; the [`Aggregator`] applies strict precedence between the two
//! plus the staleness grace window, producing the ≤2-entry
//! [`ActiveSelection`] the refresh loop displays.

mod aggregator;
mod error;
mod set;
mod source;

#[cfg(test)]
mod aggregator_tests;
#[cfg(test)]
mod set_tests;

pub use aggregator::{ActiveSelection, Aggregator, DEFAULT_STALE_GRACE_SECS};
pub use error::TimerError;
pub use set::{SortedView, TimerEntry};
pub use source::{SourceAdapter, SourceId};

/// Wall-clock now as fractional epoch seconds.
///
/// A clock sitting before the unix epoch is unrecoverable; treat it as fatal.
pub fn epoch_now() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_secs_f64()
}
