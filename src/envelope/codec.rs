//! Sealing and opening envelopes
//!
//! `seal` derives a key from the password and a fresh salt, encrypts the
//! message (wrapped in a timestamped record when a TTL is given) and packs
//! everything into one Base64 string. `open` reverses it and fails closed.

use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::{self, derive_key_with, generate_nonce, generate_salt, KdfParams};
use crate::error::{SealError, SealResult};

use super::clock::{Clock, SystemClock};
use super::format::Envelope;
use super::payload::Payload;

/// Seals and opens envelopes with a fixed work factor and time source
#[derive(Debug, Default)]
pub struct Sealer<C: Clock = SystemClock> {
    params: KdfParams,
    clock: C,
}

impl Sealer<SystemClock> {
    /// Default work factor, wall-clock time
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: KdfParams) -> Self {
        Self {
            params,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Sealer<C> {
    pub fn with_clock(params: KdfParams, clock: C) -> Self {
        Self { params, clock }
    }

    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Encrypt `message` under `password`
    ///
    /// With `ttl_seconds` set, the current time is embedded so `open` can
    /// enforce freshness. Empty messages and passwords are valid.
    pub fn seal(&self, message: &str, password: &str, ttl_seconds: Option<u64>) -> SealResult<String> {
        let salt = generate_salt();
        let nonce = generate_nonce();
        let key = derive_key_with(password, &salt, &self.params)?;

        let plaintext = match ttl_seconds {
            Some(_) => Zeroizing::new(Payload::new(message, self.clock.now()).to_bytes()?),
            None => Zeroizing::new(message.as_bytes().to_vec()),
        };

        let ciphertext = crypto::encrypt(&plaintext, &key, &nonce)?;
        let envelope = Envelope::new(salt, nonce, ciphertext);

        debug!(
            payload_bytes = plaintext.len(),
            timestamped = ttl_seconds.is_some(),
            "sealed envelope"
        );

        Ok(envelope.to_base64())
    }

    /// Decrypt an envelope produced by `seal`
    ///
    /// `ttl_seconds` must match the setting used when sealing: with a TTL the
    /// plaintext has to be a timestamped record no older than the TTL.
    pub fn open(&self, envelope: &str, password: &str, ttl_seconds: Option<u64>) -> SealResult<String> {
        let envelope = Envelope::parse(envelope)?;
        self.open_envelope(&envelope, password, ttl_seconds)
    }

    /// Decrypt an already-parsed envelope
    pub fn open_envelope(
        &self,
        envelope: &Envelope,
        password: &str,
        ttl_seconds: Option<u64>,
    ) -> SealResult<String> {
        let key = derive_key_with(password, envelope.salt(), &self.params)?;
        let plaintext = Zeroizing::new(crypto::decrypt(envelope.ciphertext(), &key, envelope.nonce())?);

        match ttl_seconds {
            Some(ttl) => {
                let payload = Payload::from_bytes(&plaintext)?;
                let now = self.clock.now();
                if let Err(err) = payload.check_fresh(now, ttl) {
                    debug!(age = payload.age_at(now), ttl, "envelope expired");
                    return Err(err);
                }
                Ok(payload.message)
            }
            None => std::str::from_utf8(&plaintext)
                .map(str::to_owned)
                .map_err(|_| SealError::InvalidEnvelope),
        }
    }
}

/// Seal with the default work factor and the system clock
pub fn seal(message: &str, password: &str, ttl_seconds: Option<u64>) -> SealResult<String> {
    Sealer::new().seal(message, password, ttl_seconds)
}

/// Open with the default work factor and the system clock
pub fn open(envelope: &str, password: &str, ttl_seconds: Option<u64>) -> SealResult<String> {
    Sealer::new().open(envelope, password, ttl_seconds)
}
