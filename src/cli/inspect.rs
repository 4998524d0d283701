//! `sealnote inspect`
//!
//! Shows the envelope header without a password. Nothing here touches the
//! key, so it cannot tell whether the envelope will open.

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine};
use clap::Args;
use serde::Serialize;

use super::input::{require, TextSource};
use crate::envelope::{Envelope, HEADER_SIZE};
use crate::error::SealResult;

/// Arguments for inspecting an envelope
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Envelope text (reads --file or stdin when omitted)
    #[arg(conflicts_with = "file")]
    pub envelope: Option<String>,

    /// Read the envelope from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Header facts about an envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeInfo {
    pub total_bytes: usize,
    pub salt: String,
    pub nonce: String,
    pub ciphertext_bytes: usize,
    /// `None` when the envelope is too short to hold a tag
    pub payload_bytes: Option<usize>,
}

impl From<&Envelope> for EnvelopeInfo {
    fn from(envelope: &Envelope) -> Self {
        Self {
            total_bytes: HEADER_SIZE + envelope.ciphertext().len(),
            salt: STANDARD.encode(envelope.salt()),
            nonce: STANDARD.encode(envelope.nonce()),
            ciphertext_bytes: envelope.ciphertext().len(),
            payload_bytes: envelope.payload_len(),
        }
    }
}

/// Handle the inspect command
pub fn handle_inspect_command(args: InspectArgs) -> SealResult<()> {
    let text = TextSource::from_args(args.envelope, args.file).read()?;
    require(text.trim(), "envelope")?;

    let info = EnvelopeInfo::from(&Envelope::parse(&text)?);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Envelope");
    println!("========");
    println!("Total size:      {} bytes", info.total_bytes);
    println!("Salt:            {}", info.salt);
    println!("Nonce:           {}", info.nonce);
    println!("Ciphertext+tag:  {} bytes", info.ciphertext_bytes);
    match info.payload_bytes {
        Some(len) => println!("Payload:         {} bytes", len),
        None => println!("Payload:         none (shorter than the authentication tag)"),
    }

    Ok(())
}
