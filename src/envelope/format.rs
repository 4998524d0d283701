//! Envelope wire format
//!
//! ```text
//! Base64( salt[16] || nonce[12] || ciphertext || tag[16] )
//! ```
//!
//! Standard Base64 alphabet with padding. Parsing never touches the key;
//! it only checks the encoding and that the fixed header is present.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::crypto::{NONCE_SIZE, SALT_SIZE, TAG_SIZE};
use crate::error::{SealError, SealResult};

/// Bytes before the ciphertext: salt followed by nonce
pub const HEADER_SIZE: usize = SALT_SIZE + NONCE_SIZE;

/// A decoded envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    salt: [u8; SALT_SIZE],
    nonce: [u8; NONCE_SIZE],
    ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn new(salt: [u8; SALT_SIZE], nonce: [u8; NONCE_SIZE], ciphertext: Vec<u8>) -> Self {
        Self {
            salt,
            nonce,
            ciphertext,
        }
    }

    /// Split raw bytes into header and ciphertext
    pub fn from_bytes(bytes: &[u8]) -> SealResult<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(SealError::InvalidEnvelope);
        }

        let (salt, rest) = bytes.split_at(SALT_SIZE);
        let (nonce, ciphertext) = rest.split_at(NONCE_SIZE);

        Ok(Self {
            salt: salt.try_into().map_err(|_| SealError::InvalidEnvelope)?,
            nonce: nonce.try_into().map_err(|_| SealError::InvalidEnvelope)?,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Decode the Base64 transport form; surrounding whitespace is ignored
    pub fn parse(text: &str) -> SealResult<Self> {
        let bytes = STANDARD
            .decode(text.trim())
            .map_err(|_| SealError::InvalidEnvelope)?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + self.ciphertext.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn salt(&self) -> &[u8; SALT_SIZE] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_SIZE] {
        &self.nonce
    }

    /// Ciphertext with the authentication tag appended
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Length of the encrypted payload, if the tag is present
    pub fn payload_len(&self) -> Option<usize> {
        self.ciphertext.len().checked_sub(TAG_SIZE)
    }
}

impl std::fmt::Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base64())
    }
}
