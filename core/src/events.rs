//! Inbound event surface, abstracted from the actual transports.
//!
//! The wireless gadget link and the message bus each decode their own wire
//! traffic into [`SourceEvent`]s; the core only consumes the decoded events.

use serde::{Deserialize, Serialize};

use crate::timers::TimerError;

/// One timer record from a bulk snapshot (the bus feed's payload shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerRecord {
    pub id: String,
    /// ISO-8601-like date-time with offset, e.g. `2020-10-03T12:46:12-0600`.
    #[serde(rename = "expireTime")]
    pub expire_time: String,
}

/// A decoded timer event from one of the external feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceEvent {
    /// Set or replace a timer. An update to a known id (say the user adds
    /// 30 seconds) just moves its expiry.
    Set { id: String, expiry: f64 },
    /// Delete a timer; unknown ids are ignored.
    Delete { id: String },
    /// The feed's link dropped; all of its timers are wiped.
    Disconnected,
    /// Wholesale snapshot replacing the source's entire set.
    ReplaceAll { timers: Vec<TimerRecord> },
}

/// Parse an ISO-8601-like date-time with offset into epoch seconds.
///
/// The bus feed emits offsets without a colon (`-0600`), which strict
/// RFC 3339 parsing rejects, so fall back to `%z`.
pub fn parse_expiry(value: &str) -> Result<f64, TimerError> {
    let parsed = chrono::DateTime::parse_from_rfc3339(value)
        .or_else(|_| chrono::DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z"))
        .map_err(|source| TimerError::ParseExpiry {
            value: value.to_string(),
            source,
        })?;
    Ok(parsed.timestamp_millis() as f64 / 1000.0)
}
