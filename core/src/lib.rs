pub mod config;
pub mod display;
pub mod events;
pub mod schedule;
pub mod service;
pub mod timers;

// Re-exports for convenience
pub use config::{AppConfig, ConfigError, DisplayConfig};
pub use display::{format_remaining, Renderer};
pub use events::{parse_expiry, SourceEvent, TimerRecord};
pub use schedule::{sleep_until_boundary, RefreshScheduler};
pub use service::TimerService;
pub use timers::{
    epoch_now, ActiveSelection, Aggregator, SortedView, SourceAdapter, SourceId, TimerEntry,
    TimerError, DEFAULT_STALE_GRACE_SECS,
};
