//! `sealnote seal`

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::input::{read_password, require, TextSource};
use crate::config::Settings;
use crate::error::SealResult;

/// Arguments for sealing a message
#[derive(Debug, Args)]
pub struct SealArgs {
    /// Message text (reads --file or stdin when omitted)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Refuse to open the envelope after this many seconds
    #[arg(long, conflicts_with = "no_ttl")]
    pub ttl: Option<u64>,

    /// Do not embed a timestamp, even if a default TTL is configured
    #[arg(long)]
    pub no_ttl: bool,
}

/// Handle the seal command
pub fn handle_seal_command(settings: &Settings, args: SealArgs) -> SealResult<()> {
    let message = TextSource::from_args(args.message, args.file).read()?;
    require(&message, "message")?;

    let password = read_password(true)?;
    let ttl = settings.resolve_ttl(args.ttl, args.no_ttl);

    let envelope = seal_message(settings, &message, &password, ttl)?;
    println!("{}", envelope);
    Ok(())
}

/// Validate inputs and seal with the configured work factor
pub fn seal_message(
    settings: &Settings,
    message: &str,
    password: &str,
    ttl_seconds: Option<u64>,
) -> SealResult<String> {
    require(message, "message")?;
    require(password, "password")?;

    info!(ttl = ?ttl_seconds, iterations = settings.kdf.iterations, "sealing message");
    settings.sealer().seal(message, password, ttl_seconds)
}
