//! Timestamped payload carried inside an envelope when a TTL is in force

use serde::{Deserialize, Serialize};

use crate::error::{SealError, SealResult};

/// The record encrypted in TTL mode: `{"message": ..., "created_at": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Payload {
    /// The original message text
    pub message: String,
    /// Seal time in epoch seconds
    pub created_at: i64,
}

impl Payload {
    pub fn new(message: impl Into<String>, created_at: i64) -> Self {
        Self {
            message: message.into(),
            created_at,
        }
    }

    /// Serialize to the JSON bytes that get encrypted
    pub fn to_bytes(&self) -> SealResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parse decrypted bytes; anything but the exact record is invalid
    pub fn from_bytes(bytes: &[u8]) -> SealResult<Self> {
        serde_json::from_slice(bytes).map_err(|_| SealError::InvalidEnvelope)
    }

    /// Seconds elapsed between sealing and `now` (negative if sealed in the future)
    pub fn age_at(&self, now: i64) -> i64 {
        now.saturating_sub(self.created_at)
    }

    /// Reject payloads older than `ttl_seconds`; exactly `ttl_seconds` old is still fresh
    pub fn check_fresh(&self, now: i64, ttl_seconds: u64) -> SealResult<()> {
        let age_seconds = self.age_at(now);
        let limit = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        if age_seconds > limit {
            return Err(SealError::Expired {
                age_seconds,
                ttl_seconds,
            });
        }
        Ok(())
    }
}
