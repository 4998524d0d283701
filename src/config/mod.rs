//! Configuration module for sealnote
//!
//! - Config directory resolution
//! - Settings persistence (default TTL, KDF work factor)

pub mod paths;
pub mod settings;

pub use paths::SealPaths;
pub use settings::Settings;
