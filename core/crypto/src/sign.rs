//! Digital signatures using RSA PKCS#1 v1.5 with SHA-512.
//!
//! Signing hashes the full payload with SHA-512 before the RSA operation.
//! Signatures travel as standard base64 (with padding) of the raw signature
//! bytes, round-trippable to the exact bytes the provider produced.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha512;

use strongbox_common::{Error, Result};

/// Sign a byte payload with a private key.
///
/// # Postconditions
/// - Returns a base64 token that decodes back to the raw signature bytes
///
/// # Errors
/// - Returns `SignatureError` on a provider signing fault
pub fn sign(data: &[u8], private_key: &RsaPrivateKey) -> Result<String> {
    let signing_key = SigningKey::<Sha512>::new(private_key.clone());
    let signature = signing_key
        .try_sign(data)
        .map_err(|e| Error::Signature(format!("signing failed: {e}")))?;
    Ok(BASE64.encode(signature.to_bytes()))
}

/// Verify a signature token against a payload and public key.
///
/// A well-formed signature that does not match the data or key yields
/// `Ok(false)`: that is a normal outcome, not a fault.
///
/// # Errors
/// - Returns `SignatureError` if the token is not valid base64 or does not
///   frame a signature for the configured algorithm
pub fn verify(data: &[u8], token: &str, public_key: &RsaPublicKey) -> Result<bool> {
    let raw = BASE64
        .decode(token)
        .map_err(|e| Error::Signature(format!("malformed signature encoding: {e}")))?;
    let signature = Signature::try_from(raw.as_slice())
        .map_err(|e| Error::Signature(format!("malformed signature: {e}")))?;

    let verifying_key = VerifyingKey::<Sha512>::new(public_key.clone());
    Ok(verifying_key.verify(data, &signature).is_ok())
}
