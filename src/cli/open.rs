//! `sealnote open`

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use super::input::{read_password, require, TextSource};
use crate::config::Settings;
use crate::error::SealResult;

/// Arguments for opening an envelope
#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Envelope text (reads --file or stdin when omitted)
    #[arg(conflicts_with = "file")]
    pub envelope: Option<String>,

    /// Read the envelope from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Reject envelopes older than this many seconds
    #[arg(long, conflicts_with = "no_ttl")]
    pub ttl: Option<u64>,

    /// Expect an envelope sealed without a timestamp
    #[arg(long)]
    pub no_ttl: bool,
}

/// Handle the open command
pub fn handle_open_command(settings: &Settings, args: OpenArgs) -> SealResult<()> {
    let envelope = TextSource::from_args(args.envelope, args.file).read()?;
    require(envelope.trim(), "envelope")?;

    let password = read_password(false)?;
    let ttl = settings.resolve_ttl(args.ttl, args.no_ttl);

    let message = open_message(settings, &envelope, &password, ttl)?;
    println!("{}", message);
    Ok(())
}

/// Validate inputs and open with the configured work factor
pub fn open_message(
    settings: &Settings,
    envelope: &str,
    password: &str,
    ttl_seconds: Option<u64>,
) -> SealResult<String> {
    require(envelope.trim(), "envelope")?;
    require(password, "password")?;

    info!(ttl = ?ttl_seconds, "opening envelope");
    settings
        .sealer()
        .open(envelope, password, ttl_seconds)
        .inspect_err(|err| debug!(expired = err.is_expired(), "open failed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::seal::seal_message;
    use crate::crypto::key_derivation::MIN_ITERATIONS;
    use crate::crypto::KdfParams;
    use crate::error::SealError;

    fn settings() -> Settings {
        Settings {
            kdf: KdfParams::with_iterations(MIN_ITERATIONS),
            ..Settings::default()
        }
    }

    #[test]
    fn test_open_message() {
        let settings = settings();
        let envelope = seal_message(&settings, "hello", "secret123", None).unwrap();
        assert_eq!(
            open_message(&settings, &envelope, "secret123", None).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_open_wrong_password() {
        let settings = settings();
        let envelope = seal_message(&settings, "hello", "secret123", None).unwrap();
        let err = open_message(&settings, &envelope, "wrong", None).unwrap_err();
        assert!(err.is_invalid_envelope());
    }

    #[test]
    fn test_blank_envelope_is_missing_input() {
        let result = open_message(&settings(), "  \n", "pw", None);
        assert!(matches!(result, Err(SealError::MissingInput("envelope"))));
    }

    #[test]
    fn test_empty_password_is_missing_input() {
        let result = open_message(&settings(), "AAAA", "", None);
        assert!(matches!(result, Err(SealError::MissingInput("password"))));
    }
}
