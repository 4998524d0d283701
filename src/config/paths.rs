//! Path management for sealnote
//!
//! ## Path Resolution Order
//!
//! 1. `SEALNOTE_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory, e.g. `~/.config/sealnote` on Linux

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SealError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "SEALNOTE_CONFIG_DIR";

/// Manages all paths used by sealnote
#[derive(Debug, Clone)]
pub struct SealPaths {
    base_dir: PathBuf,
}

impl SealPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, SealError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SealPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), SealError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SealError::Io(format!("Failed to create config directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, SealError> {
    ProjectDirs::from("", "", "sealnote")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SealError::Config("Could not determine a config directory".into()))
}
