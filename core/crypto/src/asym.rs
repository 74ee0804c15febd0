//! Asymmetric encryption using RSA-OAEP.
//!
//! OAEP uses SHA-256 for both the main digest and the MGF1 mask generation
//! function, with an empty label. The engine is single-block only: plaintext
//! longer than the modulus minus the padding overhead is rejected rather
//! than chunked.

use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use strongbox_common::{Error, Result};

use crate::random;

/// OAEP padding overhead in bytes for a SHA-256 digest (2 * 32 + 2).
pub const OAEP_OVERHEAD: usize = 66;

/// Encrypt plaintext under a public key.
///
/// # Preconditions
/// - `plaintext` must be non-empty and at most modulus - OAEP_OVERHEAD bytes
///
/// # Errors
/// - Returns `InvalidData` if plaintext is empty or exceeds the block bound
/// - Returns `InvalidKey` if the key is unusable for RSA-OAEP
pub fn encrypt(public_key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    if plaintext.is_empty() {
        return Err(Error::InvalidData("plaintext must not be empty".to_string()));
    }

    let mut rng = random::secure_random();
    public_key
        .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| match e {
            rsa::Error::MessageTooLong => Error::InvalidData(format!(
                "plaintext exceeds RSA-OAEP block bound: {e}"
            )),
            other => Error::InvalidKey(format!("RSA encryption failed: {other}")),
        })
}

/// Decrypt ciphertext under a private key.
///
/// # Errors
/// - Returns `InvalidData` if ciphertext is empty, corrupted, or was
///   produced under a different key (OAEP gives no finer distinction)
pub fn decrypt(private_key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() {
        return Err(Error::InvalidData("ciphertext must not be empty".to_string()));
    }

    private_key
        .decrypt(Oaep::new::<Sha256>(), ciphertext)
        .map_err(|e| Error::InvalidData(format!("RSA decryption failed: {e}")))
}
