//! # Canonical Serialization
//!
//! Defines `CanonicalBytes`, the sole construction path for bytes that get
//! fingerprinted or signed anywhere in Certledger.
//!
//! ## Security Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way to
//! construct it is through `CanonicalBytes::new()`, which applies a
//! float-rejecting coercion pass before JCS (RFC 8785) serialization.
//!
//! A certificate fingerprint is only useful if every party computes the same
//! one: the issuer at issuance time, the registry caller at submission time,
//! and any verifier years later. Hashing ad-hoc `serde_json` output would
//! let two correct programs disagree. Any function that hashes or signs
//! must accept `&CanonicalBytes`, and the only way to produce one is through
//! this pipeline.
//!
//! ## Coercion Rules
//!
//! 1. **Reject floats** — payload numbers must be strings or integers.
//!    Floats have non-deterministic JCS number serialization edge cases.
//! 2. **Object keys are strings** — guaranteed by `serde_json::Map`.
//! 3. **Sequences are JSON arrays** — tuples and vectors alike.
//!
//! Datetime normalization happens at the type level: [`crate::Timestamp`]
//! serializes as UTC ISO8601 with Z suffix, truncated to seconds.
//!
//! After coercion, serialization uses `serde_jcs` for RFC 8785 output:
//! sorted keys, compact separators, deterministic byte sequence.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization with Certledger's
/// type coercion rules.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - All numbers in the source value are integers or strings, never floats.
/// - Serialization uses sorted keys with compact separators (RFC 8785).
///
/// The inner `Vec<u8>` is private, so downstream code cannot construct a
/// value that violates these invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the ONLY way to construct `CanonicalBytes`. All fingerprint
    /// and signature computation in the workspace must flow through here.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::FloatRejected` if the value contains
    /// float numbers, or `CanonicalizationError::SerializationFailed` if JCS
    /// serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        let coerced = coerce_json_value(value)?;
        let bytes = serialize_canonical(&coerced)?;
        Ok(Self(bytes))
    }

    /// Access the canonical bytes for digest or signature computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively walk a JSON value, rejecting floats.
///
/// `null`, `bool`, `string`, and integer numbers pass through unchanged.
/// Objects and arrays are recursed. A number not representable as i64/u64
/// is rejected with `FloatRejected`.
fn coerce_json_value(value: Value) -> Result<Value, CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(value),
        Value::Number(ref n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(value)
        }
        Value::Object(map) => {
            let mut coerced = serde_json::Map::new();
            for (k, v) in map {
                coerced.insert(k, coerce_json_value(v)?);
            }
            Ok(Value::Object(coerced))
        }
        Value::Array(arr) => {
            let coerced: Result<Vec<_>, _> = arr.into_iter().map(coerce_json_value).collect();
            Ok(Value::Array(coerced?))
        }
    }
}

/// Serialize a JSON value in JCS-canonical form (RFC 8785): sorted keys,
/// compact separators, no trailing whitespace, UTF-8 encoded.
fn serialize_canonical(value: &Value) -> Result<Vec<u8>, CanonicalizationError> {
    let s = serde_jcs::to_string(value)?;
    Ok(s.into_bytes())
}
