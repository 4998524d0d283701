//! User settings for sealnote
//!
//! The work factor lives here because it is not recorded in the envelope:
//! both sides must agree on it for an envelope to open.

use serde::{Deserialize, Serialize};

use super::paths::SealPaths;
use crate::crypto::KdfParams;
use crate::envelope::Sealer;
use crate::error::SealError;

/// Freshness window used by the timestamped mode (10 minutes)
pub const SUGGESTED_TTL_SECONDS: u64 = 600;

/// User settings for sealnote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// TTL applied when a command does not pass `--ttl` or `--no-ttl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ttl_seconds: Option<u64>,

    /// Key derivation parameters
    #[serde(default)]
    pub kdf: KdfParams,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_ttl_seconds: None,
            kdf: KdfParams::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SealPaths) -> Result<Self, SealError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SealError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SealError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SealPaths) -> Result<(), SealError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SealError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SealError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), SealError> {
        self.kdf.validate()
    }

    /// Pick the TTL for one command: explicit flag, then `--no-ttl`, then the default
    pub fn resolve_ttl(&self, explicit: Option<u64>, no_ttl: bool) -> Option<u64> {
        if no_ttl {
            return None;
        }
        explicit.or(self.default_ttl_seconds)
    }

    /// A sealer using the configured work factor
    pub fn sealer(&self) -> Sealer {
        Sealer::with_params(self.kdf)
    }
}
