//! Common types shared across Strongbox crates.
//!
//! This module provides the error taxonomy used by every cryptographic
//! operation, ensuring failures surface consistently to callers.

pub mod error;

pub use error::{Error, Result};
