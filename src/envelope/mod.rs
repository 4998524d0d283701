//! Password-sealed envelopes
//!
//! An envelope is `Base64(salt || nonce || ciphertext+tag)`. Every seal
//! draws a fresh salt and nonce, so sealing the same message twice never
//! produces the same text.

pub mod clock;
pub mod codec;
pub mod format;
pub mod payload;

pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{open, seal, Sealer};
pub use format::{Envelope, HEADER_SIZE};
pub use payload::Payload;
