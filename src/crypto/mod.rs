//! Cryptographic primitives for sealnote
//!
//! PBKDF2-HMAC-SHA256 key derivation and AES-256-GCM authenticated
//! encryption, plus a zeroizing string for passwords.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{decrypt, encrypt, generate_nonce, NONCE_SIZE, TAG_SIZE};
pub use key_derivation::{
    derive_key, derive_key_with, generate_salt, DerivedKey, KdfParams, KEY_SIZE, SALT_SIZE,
};
pub use secure_memory::SecureString;
