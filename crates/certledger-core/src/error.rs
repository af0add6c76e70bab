//! # Error Types
//!
//! The shared error hierarchy for the Certledger workspace. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Malformed input (bad hex, wrong digest length, float-bearing payloads)
//! is rejected here, at type construction, before a value can reach the
//! registry. The registry itself only ever sees well-formed `AccountId`
//! and `Fingerprint` values.

use thiserror::Error;

/// Top-level error type for the core crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// An account identity string could not be parsed.
    #[error("invalid account id: {0}")]
    InvalidAccountId(String),

    /// A fingerprint string could not be parsed.
    #[error("invalid fingerprint: {0}")]
    InvalidFingerprint(String),

    /// A timestamp string could not be parsed or used a non-UTC offset.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Payload numbers must be strings or integers.
    #[error("float values are not permitted in canonical representations; use string or integer: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error in cryptographic operations.
///
/// Lives in the core crate so the crypto and issuance crates can share it
/// without a dependency cycle.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Signature verification failed.
    #[error("signature verification failed: {0}")]
    VerificationFailed(String),

    /// Key generation or parsing failed.
    #[error("key error: {0}")]
    KeyError(String),

    /// The signing key does not belong to the claimed account.
    #[error("public key derives account {derived}, attestation names {claimed}")]
    AccountMismatch {
        /// Account derived from the public key on the attestation.
        derived: String,
        /// Account the attestation claims as issuer.
        claimed: String,
    },
}
