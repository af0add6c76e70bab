//! # Certificate Fingerprints
//!
//! Defines `Fingerprint` and `DigestAlgorithm`, the content-addressed
//! identifier a certificate is known by. The registry stores fingerprints
//! only — never the certificate content itself.
//!
//! ## Security Invariant
//!
//! [`fingerprint()`] accepts only `&CanonicalBytes`, not raw `&[u8]`.
//! Every fingerprint in the system is therefore produced through the
//! canonicalization pipeline, so issuer, submitter, and verifier agree on
//! the fingerprint of the same logical content.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::CoreError;

/// The hash algorithm that produced a fingerprint.
///
/// SHA-256 is the only algorithm in use. The tag is carried anyway so the
/// registry logic stays digest-agnostic and stored fingerprints remain
/// self-describing if another algorithm is ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-256 — standard content addressing.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A certificate fingerprint: an algorithm-tagged 32-byte content hash.
///
/// Produced from `CanonicalBytes` via [`fingerprint()`], or parsed from its
/// string form `sha256:<64 lowercase hex chars>`. Renders and serializes as
/// that string form. Totally ordered so registries can keep fingerprints in
/// deterministic sorted sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint {
    /// The hash algorithm that produced this fingerprint.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl Fingerprint {
    /// Create a fingerprint from raw bytes and algorithm.
    ///
    /// Prefer [`fingerprint()`] for hashing content; this constructor is for
    /// fingerprints received from elsewhere (a snapshot, a wire format).
    pub fn new(algorithm: DigestAlgorithm, bytes: [u8; 32]) -> Self {
        Self { algorithm, bytes }
    }

    /// Parse a fingerprint from its string form.
    ///
    /// Accepts `sha256:<hex>` or a bare 64-character hex string (assumed
    /// SHA-256). Hex is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFingerprint` for unknown algorithm tags,
    /// wrong digest length, or non-hex characters.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let s = s.trim();
        let (algorithm, hex) = match s.split_once(':') {
            Some(("sha256", hex)) => (DigestAlgorithm::Sha256, hex),
            Some((tag, _)) => {
                return Err(CoreError::InvalidFingerprint(format!(
                    "unknown digest algorithm {tag:?}"
                )));
            }
            None => (DigestAlgorithm::Sha256, s),
        };
        if hex.len() != 64 {
            return Err(CoreError::InvalidFingerprint(format!(
                "digest hex must be 64 chars, got {}",
                hex.len()
            )));
        }
        let mut bytes = [0u8; 32];
        decode_hex(hex, &mut bytes).map_err(CoreError::InvalidFingerprint)?;
        Ok(Self { algorithm, bytes })
    }

    /// Render the digest as a lowercase hex string, without the algorithm tag.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute the SHA-256 fingerprint of canonical bytes.
///
/// This is the primary fingerprint computation path. The signature enforces
/// that only `CanonicalBytes` (produced through the canonicalization
/// pipeline) can be hashed — no code path can fingerprint non-canonical
/// bytes.
pub fn fingerprint(data: &CanonicalBytes) -> Fingerprint {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Fingerprint::new(DigestAlgorithm::Sha256, bytes)
}

/// Decode a hex string into `out`, which must be exactly the right length.
pub(crate) fn decode_hex(hex: &str, out: &mut [u8]) -> Result<(), String> {
    if hex.len() != out.len() * 2 {
        return Err(format!(
            "hex length {} does not match expected {} bytes",
            hex.len(),
            out.len()
        ));
    }
    for (i, byte) in out.iter_mut().enumerate() {
        let pos = i * 2;
        *byte = u8::from_str_radix(&hex[pos..pos + 2], 16)
            .map_err(|e| format!("invalid hex at position {pos}: {e}"))?;
    }
    Ok(())
}
