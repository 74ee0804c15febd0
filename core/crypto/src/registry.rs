//! Algorithm registry and facade entry point.
//!
//! [`CryptoCore`] parses the algorithm identifiers once at construction and
//! afterwards holds only immutable configuration, so a single instance can
//! be shared freely across threads. Cipher instances are built fresh per
//! call from the caller's key; no per-call state is retained.

use rand::rngs::OsRng;
use tracing::debug;

use strongbox_common::{Error, Result};

use crate::config::CryptoConfig;
use crate::keys::{DerivedKey, RsaPrivateKey, RsaPublicKey, SymmetricKey};
use crate::{aead, asym, kdf, sign};

/// Symmetric AEAD algorithms the provider supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymmetricAlgorithm {
    Aes256Gcm,
}

/// Asymmetric cipher algorithms the provider supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AsymmetricAlgorithm {
    RsaOaepSha256,
}

/// Password-based derivation algorithms the provider supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DerivationAlgorithm {
    Pbkdf2HmacSha512,
}

/// Signature algorithms the provider supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignatureAlgorithm {
    Sha512Rsa,
}

fn parse_symmetric(identifier: &str) -> Result<SymmetricAlgorithm> {
    match identifier {
        "AES-256-GCM" => Ok(SymmetricAlgorithm::Aes256Gcm),
        other => Err(Error::UnsupportedAlgorithm(other.to_string())),
    }
}

fn parse_asymmetric(identifier: &str) -> Result<AsymmetricAlgorithm> {
    match identifier {
        "RSA-OAEP-SHA-256" => Ok(AsymmetricAlgorithm::RsaOaepSha256),
        other => Err(Error::UnsupportedAlgorithm(other.to_string())),
    }
}

fn parse_derivation(identifier: &str) -> Result<DerivationAlgorithm> {
    match identifier {
        "PBKDF2-HMAC-SHA-512" => Ok(DerivationAlgorithm::Pbkdf2HmacSha512),
        other => Err(Error::UnsupportedAlgorithm(other.to_string())),
    }
}

fn parse_signature(identifier: &str) -> Result<SignatureAlgorithm> {
    match identifier {
        "SHA-512-RSA" => Ok(SignatureAlgorithm::Sha512Rsa),
        other => Err(Error::UnsupportedAlgorithm(other.to_string())),
    }
}

/// Unified access point for the cryptographic primitives.
///
/// Constructed once at startup and reused for the process lifetime. All
/// per-call parameters (keys, data, nonces, AAD) are passed in and never
/// retained.
#[derive(Debug, Clone)]
pub struct CryptoCore {
    symmetric: SymmetricAlgorithm,
    asymmetric: AsymmetricAlgorithm,
    derivation: DerivationAlgorithm,
    signature: SignatureAlgorithm,
    derived_key_len: usize,
    iterations: u32,
}

impl CryptoCore {
    /// Build the facade from an algorithm configuration.
    ///
    /// # Errors
    /// - Returns `UnsupportedAlgorithm` for an unknown algorithm identifier
    /// - Returns `InvalidParameters` for a tag length other than 128 bits,
    ///   a zero iteration count, or a derived key length that is zero or
    ///   not a whole number of bytes
    pub fn new(config: &CryptoConfig) -> Result<Self> {
        let symmetric = parse_symmetric(&config.symmetric_algorithm)?;
        let asymmetric = parse_asymmetric(&config.asymmetric_algorithm)?;
        let derivation = parse_derivation(&config.derivation_algorithm)?;
        let signature = parse_signature(&config.signature_algorithm)?;

        if config.tag_bits != aead::TAG_SIZE * 8 {
            return Err(Error::InvalidParameters(format!(
                "unsupported tag length: {} bits",
                config.tag_bits
            )));
        }
        if config.iterations == 0 {
            return Err(Error::InvalidParameters(
                "iteration count must be non-zero".to_string(),
            ));
        }
        if config.derived_key_bits == 0 || config.derived_key_bits % 8 != 0 {
            return Err(Error::InvalidParameters(format!(
                "invalid derived key length: {} bits",
                config.derived_key_bits
            )));
        }

        debug!(
            symmetric = %config.symmetric_algorithm,
            asymmetric = %config.asymmetric_algorithm,
            derivation = %config.derivation_algorithm,
            signature = %config.signature_algorithm,
            "crypto registry initialized"
        );

        Ok(Self {
            symmetric,
            asymmetric,
            derivation,
            signature,
            derived_key_len: config.derived_key_bits / 8,
            iterations: config.iterations,
        })
    }

    /// Build the facade with the default algorithm configuration.
    pub fn default_config() -> Result<Self> {
        Self::new(&CryptoConfig::default())
    }

    /// Encrypt with an engine-generated nonce appended after the tagged
    /// ciphertext.
    pub fn symmetric_encrypt(
        &self,
        key: &SymmetricKey,
        data: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        match self.symmetric {
            SymmetricAlgorithm::Aes256Gcm => aead::encrypt(key, data, aad),
        }
    }

    /// Encrypt with a caller-supplied nonce; the nonce is not embedded.
    pub fn symmetric_encrypt_with_nonce(
        &self,
        key: &SymmetricKey,
        data: &[u8],
        nonce: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        match self.symmetric {
            SymmetricAlgorithm::Aes256Gcm => aead::encrypt_with_nonce(key, data, nonce, aad),
        }
    }

    /// Decrypt ciphertext whose trailing bytes carry the nonce.
    pub fn symmetric_decrypt(
        &self,
        key: &SymmetricKey,
        data: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        match self.symmetric {
            SymmetricAlgorithm::Aes256Gcm => aead::decrypt(key, data, aad),
        }
    }

    /// Decrypt ciphertext whose nonce is supplied out of band.
    pub fn symmetric_decrypt_with_nonce(
        &self,
        key: &SymmetricKey,
        data: &[u8],
        nonce: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        match self.symmetric {
            SymmetricAlgorithm::Aes256Gcm => aead::decrypt_with_nonce(key, data, nonce, aad),
        }
    }

    /// Encrypt a single block of plaintext under a public key.
    pub fn asymmetric_encrypt(&self, key: &RsaPublicKey, data: &[u8]) -> Result<Vec<u8>> {
        match self.asymmetric {
            AsymmetricAlgorithm::RsaOaepSha256 => asym::encrypt(key, data),
        }
    }

    /// Decrypt a single block of ciphertext under a private key.
    pub fn asymmetric_decrypt(&self, key: &RsaPrivateKey, data: &[u8]) -> Result<Vec<u8>> {
        match self.asymmetric {
            AsymmetricAlgorithm::RsaOaepSha256 => asym::decrypt(key, data),
        }
    }

    /// Derive a key from a password and salt with the configured iteration
    /// count and output length.
    pub fn derive_key(&self, password: &str, salt: &[u8]) -> Result<DerivedKey> {
        match self.derivation {
            DerivationAlgorithm::Pbkdf2HmacSha512 => {
                kdf::derive_key(password, salt, self.iterations, self.derived_key_len)
            }
        }
    }

    /// Sign a payload, returning a base64 signature token.
    pub fn sign(&self, data: &[u8], private_key: &RsaPrivateKey) -> Result<String> {
        match self.signature {
            SignatureAlgorithm::Sha512Rsa => sign::sign(data, private_key),
        }
    }

    /// Verify a signature token against a payload and public key.
    pub fn verify_signature(
        &self,
        data: &[u8],
        token: &str,
        public_key: &RsaPublicKey,
    ) -> Result<bool> {
        match self.signature {
            SignatureAlgorithm::Sha512Rsa => sign::verify(data, token, public_key),
        }
    }

    /// The shared cryptographically secure random generator.
    pub fn random(&self) -> OsRng {
        crate::random::secure_random()
    }
}
