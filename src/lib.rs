//! sealnote - seal short messages with a password
//!
//! A message and a password go in, a Base64 envelope comes out; the same
//! password turns the envelope back into the message. Envelopes can carry
//! a creation time so that stale ones are refused.
//!
//! # Architecture
//!
//! - `crypto`: PBKDF2-HMAC-SHA256 key derivation and AES-256-GCM
//! - `envelope`: wire format, timestamped payload, `seal`/`open`
//! - `config`: settings file and path resolution
//! - `cli`: command handlers for the `sealnote` binary
//! - `error`: error taxonomy
//!
//! # Example
//!
//! ```rust,no_run
//! let envelope = sealnote::seal("hello", "secret123", None)?;
//! assert_eq!(sealnote::open(&envelope, "secret123", None)?, "hello");
//! # Ok::<(), sealnote::SealError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod envelope;
pub mod error;

pub use envelope::{open, seal, Sealer};
pub use error::{SealError, SealResult};
