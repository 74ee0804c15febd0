//! Key types with secure memory handling.
//!
//! Symmetric and derived keys automatically zeroize their memory on drop to
//! prevent sensitive data from persisting. Asymmetric key halves are the
//! provider's opaque handles, re-exported here so callers need only this
//! crate.

use std::fmt;

use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use strongbox_common::{Error, Result};

pub use rsa::{RsaPrivateKey, RsaPublicKey};

/// Length of symmetric keys in bytes (256-bit AES).
pub const KEY_LENGTH: usize = 32;

/// Symmetric key consumed by the AEAD engine.
///
/// The key is borrowed per call and never retained by the engine.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    key: [u8; KEY_LENGTH],
}

impl SymmetricKey {
    /// Create a symmetric key from raw bytes.
    pub fn from_bytes(key: [u8; KEY_LENGTH]) -> Self {
        Self { key }
    }

    /// Create a symmetric key from a byte slice.
    ///
    /// # Errors
    /// - Returns `InvalidKey` if the slice is not exactly KEY_LENGTH bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_LENGTH {
            return Err(Error::InvalidKey(format!(
                "invalid key length: expected {}, got {}",
                KEY_LENGTH,
                bytes.len()
            )));
        }
        let mut key = [0u8; KEY_LENGTH];
        key.copy_from_slice(bytes);
        Ok(Self { key })
    }

    /// Get the key bytes.
    ///
    /// # Security
    /// The returned slice should be used immediately and not stored.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }

    /// Generate a random symmetric key from the OS generator.
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LENGTH];
        crate::random::secure_random().fill_bytes(&mut key);
        Self { key }
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricKey([REDACTED])")
    }
}

/// Key material produced by password-based derivation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: Vec<u8>,
}

impl DerivedKey {
    pub(crate) fn from_vec(key: Vec<u8>) -> Self {
        Self { key }
    }

    /// Get the derived key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Length of the derived key in bytes.
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Whether the derived key is empty (never true for registry output).
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey([REDACTED])")
    }
}
