//! AES-256-GCM encryption/decryption
//!
//! Authenticated encryption of a payload under a derived key. The nonce is
//! supplied by the caller so the envelope can carry it alongside the salt.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};

use crate::error::{SealError, SealResult};

use super::DerivedKey;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// Generate a fresh random nonce from the OS generator
pub fn generate_nonce() -> [u8; NONCE_SIZE] {
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Encrypt plaintext, returning ciphertext with the tag appended
pub fn encrypt(
    plaintext: &[u8],
    key: &DerivedKey,
    nonce: &[u8; NONCE_SIZE],
) -> SealResult<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SealError::Encryption(format!("Failed to create cipher: {}", e)))?;

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| SealError::Encryption(format!("Encryption failed: {}", e)))
}

/// Decrypt ciphertext with its appended tag
///
/// A wrong key and altered data are indistinguishable here; both are
/// reported as an invalid envelope.
pub fn decrypt(
    ciphertext: &[u8],
    key: &DerivedKey,
    nonce: &[u8; NONCE_SIZE],
) -> SealResult<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SealError::Encryption(format!("Failed to create cipher: {}", e)))?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| SealError::InvalidEnvelope)
}
