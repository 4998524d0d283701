//! `sealnote config`

use clap::Subcommand;

use crate::config::{paths::SealPaths, settings::Settings};
use crate::crypto::KdfParams;
use crate::error::SealResult;

/// Configuration commands
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show,

    /// Print the settings file location
    Path,

    /// Embed a timestamp and enforce this TTL by default
    SetTtl {
        /// Seconds an envelope stays readable
        seconds: u64,
    },

    /// Stop embedding timestamps by default
    ClearTtl,

    /// Change the PBKDF2 iteration count (both sides must match)
    SetIterations {
        /// Iteration count, at least 100000
        iterations: u32,
    },
}

/// Handle config commands
pub fn handle_config_command(
    paths: &SealPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> SealResult<()> {
    match cmd {
        ConfigCommands::Show => {
            show_settings(paths, settings);
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", paths.settings_file().display());
            Ok(())
        }
        ConfigCommands::SetTtl { seconds } => {
            apply_change(paths, settings, |s| s.default_ttl_seconds = Some(seconds))?;
            println!("Default TTL set to {} seconds.", seconds);
            Ok(())
        }
        ConfigCommands::ClearTtl => {
            apply_change(paths, settings, |s| s.default_ttl_seconds = None)?;
            println!("Default TTL cleared; envelopes carry no timestamp.");
            Ok(())
        }
        ConfigCommands::SetIterations { iterations } => {
            apply_change(paths, settings, |s| {
                s.kdf = KdfParams::with_iterations(iterations)
            })?;
            println!("KDF iterations set to {}.", iterations);
            println!("Envelopes sealed with a different count will no longer open.");
            Ok(())
        }
    }
}

/// Apply an edit to a copy, validate and save, then commit it in memory
fn apply_change(
    paths: &SealPaths,
    settings: &mut Settings,
    edit: impl FnOnce(&mut Settings),
) -> SealResult<()> {
    let mut updated = settings.clone();
    edit(&mut updated);
    updated.save(paths)?;
    *settings = updated;
    Ok(())
}

fn show_settings(paths: &SealPaths, settings: &Settings) {
    println!("sealnote Configuration");
    println!("======================");
    println!("Settings file:  {}", paths.settings_file().display());
    println!();
    println!("Key derivation: PBKDF2-HMAC-SHA256");
    println!("  Iterations:   {}", settings.kdf.iterations);
    println!("Cipher:         AES-256-GCM");
    match settings.default_ttl_seconds {
        Some(ttl) => println!("Default TTL:    {} seconds", ttl),
        None => println!("Default TTL:    none"),
    }
}
