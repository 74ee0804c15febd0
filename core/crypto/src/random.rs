//! Shared randomness source.
//!
//! Every component needing randomness draws from the operating system
//! CSPRNG. The generator handle is zero-sized and safe to use from any
//! number of threads; no reseeding policy is applied beyond the provider
//! default.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::aead::NONCE_SIZE;

/// The cryptographically secure random generator shared by all engines.
pub fn secure_random() -> OsRng {
    OsRng
}

/// Generate a fresh AEAD nonce.
///
/// Called once per self-contained encryption; never reused across calls.
pub fn generate_nonce() -> [u8; NONCE_SIZE] {
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Fill a buffer of the given length with random bytes.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}
