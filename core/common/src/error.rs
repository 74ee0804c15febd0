//! Common error types for Strongbox.

use thiserror::Error;

/// Top-level error type for Strongbox operations.
///
/// Every provider-level fault is caught at the boundary of the operation
/// that triggered it and re-raised as one of these variants, carrying the
/// low-level cause in the message for diagnostics. No operation retries or
/// degrades silently.
#[derive(Debug, Error)]
pub enum Error {
    /// Key material is unusable for the requested operation or algorithm.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Algorithm parameter construction was rejected (e.g. bad nonce length).
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Input is empty, too short, too long for the scheme, or failed an
    /// authentication or padding check.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Signing or verification infrastructure fault.
    ///
    /// A well-formed signature that simply does not match is reported as a
    /// boolean verification result, never as this error.
    #[error("Signature error: {0}")]
    Signature(String),

    /// A configured algorithm identifier is not available from the provider.
    /// Raised once at registry construction, never per call.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_cause() {
        let err = Error::InvalidData("authentication failed".to_string());
        assert_eq!(err.to_string(), "Invalid data: authentication failed");
    }

    #[test]
    fn test_unsupported_algorithm_display() {
        let err = Error::UnsupportedAlgorithm("AES-128-CBC".to_string());
        assert!(err.to_string().contains("AES-128-CBC"));
    }
}
