//! CLI command handlers
//!
//! Bridges clap argument parsing with the envelope codec. Handlers print
//! results to stdout; the binary decides how errors are shown.

pub mod config;
pub mod input;
pub mod inspect;
pub mod open;
pub mod seal;

use clap::ValueEnum;

pub use config::{handle_config_command, ConfigCommands};
pub use inspect::{handle_inspect_command, InspectArgs};
pub use open::{handle_open_command, OpenArgs};
pub use seal::{handle_seal_command, SealArgs};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Map `-v` occurrences to a tracing filter directive
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
