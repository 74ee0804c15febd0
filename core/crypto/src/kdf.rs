//! Password-based key derivation using PBKDF2-HMAC-SHA-512.
//!
//! Turns a low-entropy password plus salt into a fixed-length key through a
//! large iteration count. Derivation is deterministic: identical password,
//! salt, iteration count and output length always yield the same key. Salt
//! uniqueness is the caller's responsibility, as is zeroizing the password
//! after use.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;

use strongbox_common::{Error, Result};

use crate::keys::DerivedKey;

/// Derive a key from a password and salt.
///
/// # Postconditions
/// - Returns `output_len` bytes of derived key material, zeroized on drop
///
/// # Errors
/// - Returns `InvalidParameters` if `iterations` or `output_len` is zero
pub fn derive_key(
    password: &str,
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<DerivedKey> {
    if iterations == 0 {
        return Err(Error::InvalidParameters(
            "iteration count must be non-zero".to_string(),
        ));
    }
    if output_len == 0 {
        return Err(Error::InvalidParameters(
            "derived key length must be non-zero".to_string(),
        ));
    }

    let mut key = vec![0u8; output_len];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt, iterations, &mut key);
    Ok(DerivedKey::from_vec(key))
}
