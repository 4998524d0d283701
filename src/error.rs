//! Error types for sealnote
//!
//! Codec failures are a small closed set so callers can tell a bad
//! envelope from an expired one, while still showing users one generic
//! notice for both.

use thiserror::Error;

/// Text shown to end users for any envelope that cannot be opened
pub const UNREADABLE_MESSAGE: &str =
    "Cannot read this message (wrong password, damaged envelope, or too old)";

/// The main error type for sealnote operations
#[derive(Error, Debug)]
pub enum SealError {
    /// Malformed Base64, a truncated envelope, or failed authentication
    #[error("Invalid envelope")]
    InvalidEnvelope,

    /// Authenticated, but older than the configured time-to-live
    #[error("Envelope expired: {age_seconds}s old, limit is {ttl_seconds}s")]
    Expired { age_seconds: i64, ttl_seconds: u64 },

    /// A required value was left empty at the call site
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    /// Key derivation or cipher setup rejected its parameters
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl SealError {
    /// Check if the envelope was rejected as malformed or unauthenticated
    pub fn is_invalid_envelope(&self) -> bool {
        matches!(self, Self::InvalidEnvelope)
    }

    /// Check if the envelope authenticated but was too old
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }

    /// Text that is safe to show an end user.
    ///
    /// Invalid and expired envelopes share one notice so a guessed password
    /// cannot be confirmed as "right but expired".
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEnvelope | Self::Expired { .. } => UNREADABLE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for SealError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for sealnote operations
pub type SealResult<T> = Result<T, SealError>;
