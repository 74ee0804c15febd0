//! Authenticated encryption using AES-256-GCM.
//!
//! The GCM nonce is 16 bytes, matching the AES block size, and the
//! authentication tag is 128 bits. Two framings are supported:
//!
//! - Self-contained: `ciphertext || tag || nonce`. The engine draws a fresh
//!   nonce per call and appends it after the tagged ciphertext.
//! - Explicit nonce: `ciphertext || tag`. The caller transports the nonce
//!   out of band and is responsible for never reusing it under one key.
//!
//! Associated data, when supplied, is bound to the tag but not encrypted.
//! An AAD mismatch on decryption is indistinguishable from a corrupted
//! ciphertext: both surface as the same authentication failure.

use aes::Aes256;
use aes_gcm::aead::generic_array::typenum::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::AesGcm;

use strongbox_common::{Error, Result};

use crate::keys::SymmetricKey;
use crate::random;

/// AES-256-GCM parameterized with a block-size nonce.
type Aes256GcmBlockNonce = AesGcm<Aes256, U16>;

/// Nonce size for the AEAD engine (equals the AES block size).
pub const NONCE_SIZE: usize = 16;

/// Authentication tag size (128 bits).
pub const TAG_SIZE: usize = 16;

/// Encrypt plaintext with a fresh, engine-generated nonce.
///
/// # Preconditions
/// - `plaintext` must be non-empty
///
/// # Postconditions
/// - Returns `ciphertext || tag || nonce`
/// - The nonce is drawn from the OS generator and differs on every call
///
/// # Errors
/// - Returns `InvalidData` if plaintext is empty
pub fn encrypt(key: &SymmetricKey, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
    if plaintext.is_empty() {
        return Err(Error::InvalidData("plaintext must not be empty".to_string()));
    }

    let nonce = random::generate_nonce();
    let mut output = encrypt_with_nonce(key, plaintext, &nonce, aad)?;
    output.extend_from_slice(&nonce);
    Ok(output)
}

/// Decrypt ciphertext carrying its nonce in the trailing bytes.
///
/// # Preconditions
/// - `data` layout must be `ciphertext || tag || nonce`
///
/// # Errors
/// - Returns `InvalidData` if data is empty or shorter than tag + nonce
/// - Returns `InvalidData` if authentication fails (corrupted ciphertext,
///   wrong key or mismatched AAD)
pub fn decrypt(key: &SymmetricKey, data: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::InvalidData("ciphertext must not be empty".to_string()));
    }
    if data.len() < TAG_SIZE + NONCE_SIZE {
        return Err(Error::InvalidData(format!(
            "ciphertext too short: {} bytes, need at least {}",
            data.len(),
            TAG_SIZE + NONCE_SIZE
        )));
    }

    let (body, nonce) = data.split_at(data.len() - NONCE_SIZE);
    decrypt_with_nonce(key, body, nonce, aad)
}

/// Encrypt plaintext with a caller-supplied nonce.
///
/// The nonce is used as-is for this single call; the engine performs no
/// reuse detection. Reusing a nonce under the same key breaks both
/// confidentiality and integrity.
///
/// # Postconditions
/// - Returns `ciphertext || tag` only; the nonce is not embedded
///
/// # Errors
/// - Returns `InvalidData` if plaintext is empty
/// - Returns `InvalidParameters` if the nonce is not NONCE_SIZE bytes
pub fn encrypt_with_nonce(
    key: &SymmetricKey,
    plaintext: &[u8],
    nonce: &[u8],
    aad: Option<&[u8]>,
) -> Result<Vec<u8>> {
    if plaintext.is_empty() {
        return Err(Error::InvalidData("plaintext must not be empty".to_string()));
    }
    verify_nonce(nonce)?;

    let cipher = Aes256GcmBlockNonce::new(GenericArray::from_slice(key.as_bytes()));
    let payload = Payload {
        msg: plaintext,
        aad: aad.unwrap_or(&[]),
    };
    cipher
        .encrypt(GenericArray::from_slice(nonce), payload)
        .map_err(|_| Error::InvalidData("encryption failed".to_string()))
}

/// Decrypt ciphertext with a caller-supplied nonce.
///
/// # Preconditions
/// - `data` layout must be `ciphertext || tag`
/// - `nonce` and `aad` must match the values used at encryption
///
/// # Errors
/// - Returns `InvalidData` if data is empty or shorter than the tag
/// - Returns `InvalidParameters` if the nonce is not NONCE_SIZE bytes
/// - Returns `InvalidData` if authentication fails
pub fn decrypt_with_nonce(
    key: &SymmetricKey,
    data: &[u8],
    nonce: &[u8],
    aad: Option<&[u8]>,
) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::InvalidData("ciphertext must not be empty".to_string()));
    }
    if data.len() < TAG_SIZE {
        return Err(Error::InvalidData(format!(
            "ciphertext too short: {} bytes, need at least {}",
            data.len(),
            TAG_SIZE
        )));
    }
    verify_nonce(nonce)?;

    let cipher = Aes256GcmBlockNonce::new(GenericArray::from_slice(key.as_bytes()));
    let payload = Payload {
        msg: data,
        aad: aad.unwrap_or(&[]),
    };
    cipher
        .decrypt(GenericArray::from_slice(nonce), payload)
        .map_err(|_| {
            // Tag mismatch, corrupted ciphertext and mismatched AAD are
            // deliberately indistinguishable here.
            Error::InvalidData("authentication failed".to_string())
        })
}

fn verify_nonce(nonce: &[u8]) -> Result<()> {
    if nonce.len() != NONCE_SIZE {
        return Err(Error::InvalidParameters(format!(
            "invalid nonce length: expected {}, got {}",
            NONCE_SIZE,
            nonce.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KEY_LENGTH;
    use proptest::prelude::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);
        let plaintext = b"Hello, World!";

        let ciphertext = encrypt(&key, plaintext, None).unwrap();
        let decrypted = decrypt(&key, &ciphertext, None).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_roundtrip_with_aad() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);
        let plaintext = b"bound payload";
        let aad = b"header-v1";

        let ciphertext = encrypt(&key, plaintext, Some(aad)).unwrap();
        let decrypted = decrypt(&key, &ciphertext, Some(aad)).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_ciphertext_layout() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);
        let plaintext = b"Test message";

        let ciphertext = encrypt(&key, plaintext, None).unwrap();

        // ciphertext || tag || nonce
        assert_eq!(ciphertext.len(), plaintext.len() + TAG_SIZE + NONCE_SIZE);
    }

    #[test]
    fn test_different_nonce_each_time() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);
        let plaintext = b"Same plaintext";

        let ct1 = encrypt(&key, plaintext, None).unwrap();
        let ct2 = encrypt(&key, plaintext, None).unwrap();

        // Trailing nonces should differ
        assert_ne!(&ct1[ct1.len() - NONCE_SIZE..], &ct2[ct2.len() - NONCE_SIZE..]);
        assert_ne!(ct1, ct2);
    }

    #[test]
    fn test_aad_mismatch_fails() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);
        let plaintext = b"payload";

        let ciphertext = encrypt(&key, plaintext, Some(b"aad-one")).unwrap();

        assert!(matches!(
            decrypt(&key, &ciphertext, Some(b"aad-two")),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            decrypt(&key, &ciphertext, None),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_wrong_key_fails() {
        let key1 = SymmetricKey::from_bytes([1u8; KEY_LENGTH]);
        let key2 = SymmetricKey::from_bytes([2u8; KEY_LENGTH]);
        let plaintext = b"Secret data";

        let ciphertext = encrypt(&key1, plaintext, None).unwrap();
        let result = decrypt(&key2, &ciphertext, None);

        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);
        let plaintext = b"Important data";

        let ciphertext = encrypt(&key, plaintext, None).unwrap();

        // Every single-byte mutation must fail authentication
        for i in 0..ciphertext.len() {
            let mut corrupted = ciphertext.clone();
            corrupted[i] ^= 0xFF;
            assert!(
                matches!(decrypt(&key, &corrupted, None), Err(Error::InvalidData(_))),
                "mutation at byte {} was not detected",
                i
            );
        }
    }

    #[test]
    fn test_empty_plaintext_fails() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);

        assert!(matches!(encrypt(&key, b"", None), Err(Error::InvalidData(_))));
        assert!(matches!(
            encrypt_with_nonce(&key, b"", &[0u8; NONCE_SIZE], None),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_short_ciphertext_fails() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);

        assert!(matches!(decrypt(&key, b"", None), Err(Error::InvalidData(_))));
        assert!(matches!(
            decrypt(&key, &[0u8; TAG_SIZE + NONCE_SIZE - 1], None),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            decrypt_with_nonce(&key, &[0u8; TAG_SIZE - 1], &[0u8; NONCE_SIZE], None),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_explicit_nonce_roundtrip() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);
        let nonce = [7u8; NONCE_SIZE];
        let plaintext = b"externally framed";

        let ciphertext = encrypt_with_nonce(&key, plaintext, &nonce, Some(b"ctx")).unwrap();
        // Nonce is not embedded
        assert_eq!(ciphertext.len(), plaintext.len() + TAG_SIZE);

        let decrypted = decrypt_with_nonce(&key, &ciphertext, &nonce, Some(b"ctx")).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_explicit_nonce_wrong_length() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);

        assert!(matches!(
            encrypt_with_nonce(&key, b"data", &[0u8; 12], None),
            Err(Error::InvalidParameters(_))
        ));
        assert!(matches!(
            decrypt_with_nonce(&key, &[0u8; TAG_SIZE + 4], &[0u8; 12], None),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_explicit_nonce_mismatch_fails() {
        let key = SymmetricKey::from_bytes([42u8; KEY_LENGTH]);
        let plaintext = b"externally framed";

        let ciphertext = encrypt_with_nonce(&key, plaintext, &[7u8; NONCE_SIZE], None).unwrap();
        let result = decrypt_with_nonce(&key, &ciphertext, &[8u8; NONCE_SIZE], None);

        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_zero_key_known_scenario() {
        let key = SymmetricKey::from_bytes([0u8; KEY_LENGTH]);
        let plaintext = b"mosip";

        let ciphertext = encrypt(&key, plaintext, None).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len() + TAG_SIZE + NONCE_SIZE);

        // Feeding the trailing nonce back with the body reproduces the input
        let (body, nonce) = ciphertext.split_at(ciphertext.len() - NONCE_SIZE);
        assert_eq!(
            decrypt_with_nonce(&key, body, nonce, None).unwrap(),
            plaintext
        );
        assert_eq!(decrypt(&key, &ciphertext, None).unwrap(), plaintext);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(
            key in prop::array::uniform32(any::<u8>()),
            plaintext in prop::collection::vec(any::<u8>(), 1..512),
            aad in prop::option::of(prop::collection::vec(any::<u8>(), 0..64)),
        ) {
            let key = SymmetricKey::from_bytes(key);
            let ciphertext = encrypt(&key, &plaintext, aad.as_deref()).unwrap();
            let decrypted = decrypt(&key, &ciphertext, aad.as_deref()).unwrap();
            prop_assert_eq!(decrypted, plaintext);
        }

        #[test]
        fn prop_bit_flip_detected(
            key in prop::array::uniform32(any::<u8>()),
            plaintext in prop::collection::vec(any::<u8>(), 1..256),
            flip_byte in any::<prop::sample::Index>(),
            flip_bit in 0u8..8,
        ) {
            let key = SymmetricKey::from_bytes(key);
            let mut ciphertext = encrypt(&key, &plaintext, None).unwrap();
            let idx = flip_byte.index(ciphertext.len());
            ciphertext[idx] ^= 1 << flip_bit;
            prop_assert!(decrypt(&key, &ciphertext, None).is_err());
        }
    }
}
