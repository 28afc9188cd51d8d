//! Error types for timer event handling.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimerError {
    #[error("failed to parse expiry timestamp '{value}'")]
    ParseExpiry {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
