//! Cryptographic primitives facade for Strongbox.
//!
//! This crate provides:
//! - Authenticated encryption using AES-256-GCM with optional associated data
//! - Asymmetric encryption using RSA-OAEP with SHA-256
//! - Password-based key derivation using PBKDF2-HMAC-SHA-512
//! - Digital signatures using RSA PKCS#1 v1.5 with SHA-512
//!
//! All operations enter through [`CryptoCore`], which parses the algorithm
//! configuration once at construction and dispatches each call to the
//! matching engine module.
//!
//! # Security Guarantees
//! - Symmetric and derived key material is automatically zeroized on drop
//! - No plaintext or key material is ever logged
//! - Authentication failures never reveal why verification failed

pub mod aead;
pub mod asym;
pub mod config;
pub mod kdf;
pub mod keys;
pub mod random;
pub mod registry;
pub mod sign;

pub use config::CryptoConfig;
pub use keys::{DerivedKey, SymmetricKey, KEY_LENGTH};
pub use registry::CryptoCore;
pub use strongbox_common::{Error, Result};
