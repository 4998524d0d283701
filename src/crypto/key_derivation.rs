//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Turns a password and a per-envelope salt into a 256-bit AES key.

use aes_gcm::aead::{rand_core::RngCore, OsRng};
use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{SealError, SealResult};

/// Length of the per-envelope salt in bytes
pub const SALT_SIZE: usize = 16;

/// Length of the derived key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// Iteration count used when nothing else is configured
pub const DEFAULT_ITERATIONS: u32 = 390_000;

/// Lowest iteration count accepted from configuration
pub const MIN_ITERATIONS: u32 = 100_000;

/// Parameters for key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    /// PBKDF2 iteration count (default: 390000)
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KdfParams {
    /// Create params with a specific iteration count
    pub fn with_iterations(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Reject work factors below the configured floor
    pub fn validate(&self) -> SealResult<()> {
        if self.iterations < MIN_ITERATIONS {
            return Err(SealError::Config(format!(
                "KDF iterations must be at least {}, got {}",
                MIN_ITERATIONS, self.iterations
            )));
        }
        Ok(())
    }
}

/// A derived encryption key, wiped from memory on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Generate a fresh random salt from the OS generator
pub fn generate_salt() -> [u8; SALT_SIZE] {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Derive a key with the default work factor
pub fn derive_key(password: &str, salt: &[u8]) -> SealResult<DerivedKey> {
    derive_key_with(password, salt, &KdfParams::default())
}

/// Derive a key from a password and salt
///
/// The password is used byte-for-byte; empty passwords are accepted.
pub fn derive_key_with(password: &str, salt: &[u8], params: &KdfParams) -> SealResult<DerivedKey> {
    if salt.is_empty() {
        return Err(SealError::Encryption("Salt must not be empty".to_string()));
    }
    if params.iterations == 0 {
        return Err(SealError::Encryption(
            "KDF iteration count must be non-zero".to_string(),
        ));
    }

    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, params.iterations, &mut key);

    Ok(DerivedKey { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keeps the suite fast; the work factor does not change correctness.
    fn fast() -> KdfParams {
        KdfParams::with_iterations(1_000)
    }

    #[test]
    fn test_derive_key() {
        let key = derive_key_with("test_password", &[7u8; 16], &fast()).unwrap();
        assert_eq!(key.as_bytes().len(), KEY_SIZE);
    }

    #[test]
    fn test_same_password_same_key() {
        let salt = [1u8; 16];
        let key1 = derive_key_with("test_password", &salt, &fast()).unwrap();
        let key2 = derive_key_with("test_password", &salt, &fast()).unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = [1u8; 16];
        let key1 = derive_key_with("password1", &salt, &fast()).unwrap();
        let key2 = derive_key_with("password2", &salt, &fast()).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key_with("same_password", &[1u8; 16], &fast()).unwrap();
        let key2 = derive_key_with("same_password", &[2u8; 16], &fast()).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_iterations_change_key() {
        let salt = [3u8; 16];
        let key1 = derive_key_with("pw", &salt, &KdfParams::with_iterations(1_000)).unwrap();
        let key2 = derive_key_with("pw", &salt, &KdfParams::with_iterations(1_001)).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_password_accepted() {
        let salt = [9u8; 16];
        let key1 = derive_key_with("", &salt, &fast()).unwrap();
        let key2 = derive_key_with("", &salt, &fast()).unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_long_password_not_truncated() {
        let salt = [4u8; 16];
        let base = "x".repeat(200);
        let longer = format!("{}y", base);
        let key1 = derive_key_with(&base, &salt, &fast()).unwrap();
        let key2 = derive_key_with(&longer, &salt, &fast()).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_known_vector() {
        // RFC 7914 section 11, PBKDF2-HMAC-SHA256 with c = 1
        let key = derive_key_with("passwd", b"salt", &KdfParams::with_iterations(1)).unwrap();
        assert_eq!(
            &key.as_bytes()[..8],
            &[0x55, 0xac, 0x04, 0x6e, 0x56, 0xe3, 0x08, 0x9f]
        );
    }

    #[test]
    fn test_generated_salts_differ() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_empty_salt_rejected() {
        let result = derive_key_with("pw", &[], &fast());
        assert!(matches!(result, Err(SealError::Encryption(_))));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = derive_key_with("pw", &[1u8; 16], &KdfParams::with_iterations(0));
        assert!(matches!(result, Err(SealError::Encryption(_))));
    }

    #[test]
    fn test_validate_floor() {
        assert!(KdfParams::default().validate().is_ok());
        assert!(KdfParams::with_iterations(MIN_ITERATIONS).validate().is_ok());
        assert!(KdfParams::with_iterations(MIN_ITERATIONS - 1).validate().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = derive_key_with("pw", &[1u8; 16], &fast()).unwrap();
        assert_eq!(format!("{:?}", key), "DerivedKey([REDACTED])");
    }
}
