//! Immutable algorithm configuration for the crypto facade.

use serde::{Deserialize, Serialize};

/// Algorithm configuration consumed by [`CryptoCore`](crate::CryptoCore).
///
/// The configuration is fixed at registry construction; per call the caller
/// may only vary key, data, nonce and AAD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoConfig {
    /// Symmetric AEAD algorithm identifier.
    pub symmetric_algorithm: String,
    /// Asymmetric cipher algorithm identifier.
    pub asymmetric_algorithm: String,
    /// Password-based derivation algorithm identifier.
    pub derivation_algorithm: String,
    /// Signature algorithm identifier.
    pub signature_algorithm: String,
    /// Authentication tag length in bits.
    pub tag_bits: usize,
    /// Derived key length in bits.
    pub derived_key_bits: usize,
    /// Iteration count for password-based derivation.
    pub iterations: u32,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            symmetric_algorithm: "AES-256-GCM".to_string(),
            asymmetric_algorithm: "RSA-OAEP-SHA-256".to_string(),
            derivation_algorithm: "PBKDF2-HMAC-SHA-512".to_string(),
            signature_algorithm: "SHA-512-RSA".to_string(),
            tag_bits: 128,
            derived_key_bits: 256,
            iterations: 100_000,
        }
    }
}
