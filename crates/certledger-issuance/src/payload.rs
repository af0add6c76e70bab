//! # Certificate Payloads
//!
//! The issuer-side structure a certificate fingerprint is computed from.
//! Equal payloads yield equal fingerprints on every implementation, because
//! fingerprinting goes through the canonicalization pipeline.
//!
//! Subjects are identified by a derived [`SubjectId`] rather than raw
//! personal data, so the payload (and anything derived from it) carries no
//! directly identifying fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use certledger_core::{
    fingerprint, AccountId, CanonicalBytes, CanonicalizationError, Fingerprint, Timestamp,
};

/// Number of hex characters in a subject identifier.
const SUBJECT_ID_LEN: usize = 15;

/// A privacy-preserving subject identifier.
///
/// The first 15 hex characters of the SHA-256 digest of the subject's
/// concatenated fields: family name, given name, national-id prefix, and
/// date of birth as `YYYYMMDD`. The same person always derives the same
/// identifier; the identifier reveals none of the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    /// Derive a subject identifier from personal fields.
    pub fn derive(
        family_name: &str,
        given_name: &str,
        id_prefix: &str,
        date_of_birth: NaiveDate,
    ) -> Self {
        let date_str = date_of_birth.format("%Y%m%d").to_string();
        let data = format!("{family_name}{given_name}{id_prefix}{date_str}");
        let digest = Sha256::digest(data.as_bytes());
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        Self(hex[..SUBJECT_ID_LEN].to_string())
    }

    /// Wrap an already-derived identifier (e.g., read from a payload file).
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The content of a certificate, as fingerprinted.
///
/// The registry never sees this structure — only the fingerprint derived
/// from it. `metadata` is free-form JSON, subject to the canonicalization
/// rules (floats are rejected at fingerprint time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificatePayload {
    /// Kind of certificate (e.g., "bachelor_degree", "transcript").
    pub certificate_type: String,
    /// The issuing institution's registry account.
    pub institution: AccountId,
    /// The derived subject identifier.
    pub subject: SubjectId,
    /// Free-form certificate metadata.
    pub metadata: serde_json::Value,
    /// When the certificate was issued.
    pub issued_at: Timestamp,
}

impl CertificatePayload {
    /// Compute the payload's fingerprint.
    ///
    /// Canonicalizes the payload and hashes the canonical bytes. Any party
    /// holding an equal payload computes an equal fingerprint.
    ///
    /// # Errors
    ///
    /// Returns a canonicalization error if `metadata` contains floats.
    pub fn fingerprint(&self) -> Result<Fingerprint, CanonicalizationError> {
        let canonical = CanonicalBytes::new(self)?;
        Ok(fingerprint(&canonical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
    }

    fn payload() -> CertificatePayload {
        CertificatePayload {
            certificate_type: "bachelor_degree".to_string(),
            institution: AccountId::from_bytes([5u8; 20]),
            subject: SubjectId::derive("Doe", "Jane", "AB123", dob()),
            metadata: serde_json::json!({"honors": true, "year": 2026}),
            issued_at: Timestamp::parse("2026-08-06T12:00:00Z").unwrap(),
        }
    }

    #[test]
    fn test_subject_id_known_vector() {
        // SHA256("DoeJaneAB12319900101") starts with f08470e283b6a6e.
        let subject = SubjectId::derive("Doe", "Jane", "AB123", dob());
        assert_eq!(subject.as_str(), "f08470e283b6a6e");
    }

    #[test]
    fn test_subject_id_is_deterministic() {
        let a = SubjectId::derive("Doe", "Jane", "AB123", dob());
        let b = SubjectId::derive("Doe", "Jane", "AB123", dob());
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 15);
    }

    #[test]
    fn test_subject_id_varies_with_inputs() {
        let base = SubjectId::derive("Doe", "Jane", "AB123", dob());
        assert_ne!(base, SubjectId::derive("Doe", "John", "AB123", dob()));
        assert_ne!(base, SubjectId::derive("Roe", "Jane", "AB123", dob()));
        assert_ne!(
            base,
            SubjectId::derive("Doe", "Jane", "AB123", NaiveDate::from_ymd_opt(1990, 1, 2).unwrap())
        );
    }

    #[test]
    fn test_equal_payloads_equal_fingerprints() {
        assert_eq!(
            payload().fingerprint().unwrap(),
            payload().fingerprint().unwrap()
        );
    }

    #[test]
    fn test_any_field_change_changes_fingerprint() {
        let base = payload().fingerprint().unwrap();

        let mut p = payload();
        p.certificate_type = "transcript".to_string();
        assert_ne!(p.fingerprint().unwrap(), base);

        let mut p = payload();
        p.metadata = serde_json::json!({"honors": false, "year": 2026});
        assert_ne!(p.fingerprint().unwrap(), base);

        let mut p = payload();
        p.issued_at = Timestamp::parse("2026-08-06T12:00:01Z").unwrap();
        assert_ne!(p.fingerprint().unwrap(), base);
    }

    #[test]
    fn test_float_metadata_rejected() {
        let mut p = payload();
        p.metadata = serde_json::json!({"gpa": 3.7});
        assert!(p.fingerprint().is_err());
    }

    #[test]
    fn test_payload_serde_roundtrip() {
        let p = payload();
        let json = serde_json::to_string(&p).unwrap();
        let parsed: CertificatePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
        assert_eq!(parsed.fingerprint().unwrap(), p.fingerprint().unwrap());
    }
}
