//! # Issuance Attestations
//!
//! The statement an institution signs when it issues a certificate: "this
//! fingerprint was issued by this account at this time". The signed
//! attestation travels with the certificate document; the registry only
//! ever receives the fingerprint.
//!
//! Verification checks two bindings:
//!
//! 1. the Ed25519 signature over the attestation's canonical bytes, and
//! 2. that the attached public key actually derives the issuer account the
//!    attestation names — a valid signature under an unrelated key must
//!    not validate a forged issuer claim.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use certledger_core::{AccountId, CanonicalBytes, CanonicalizationError, CryptoError, Fingerprint, Timestamp};
use certledger_crypto::{verify_with_public_key, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

/// Errors raised while producing or verifying attestations.
#[derive(Error, Debug)]
pub enum IssuanceError {
    /// The attestation could not be canonicalized.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Signature verification or key handling failed.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

/// The signed statement: fingerprint, issuer account, issuance time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceAttestation {
    /// The certificate fingerprint being attested.
    pub fingerprint: Fingerprint,
    /// The account of the issuing institution.
    pub issuer: AccountId,
    /// When the attestation was produced.
    pub issued_at: Timestamp,
}

impl IssuanceAttestation {
    /// The canonical bytes this attestation is signed over.
    fn canonical_bytes(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(self)
    }
}

/// An attestation together with the issuer's public key and signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedAttestation {
    /// The signed statement.
    pub attestation: IssuanceAttestation,
    /// The public key of the signing key pair.
    pub public_key: Ed25519PublicKey,
    /// Ed25519 signature over the attestation's canonical bytes.
    pub signature: Ed25519Signature,
}

impl SignedAttestation {
    /// Produce a signed attestation for `fingerprint` with the issuer's
    /// key pair. The issuer account is derived from the key pair, so the
    /// attestation cannot name an account the signer does not hold.
    pub fn issue(
        fingerprint: Fingerprint,
        keypair: &Ed25519KeyPair,
    ) -> Result<Self, IssuanceError> {
        let attestation = IssuanceAttestation {
            fingerprint,
            issuer: keypair.account_id(),
            issued_at: Timestamp::now(),
        };
        let signature = keypair.sign(&attestation.canonical_bytes()?);
        Ok(Self {
            attestation,
            public_key: keypair.public_key(),
            signature,
        })
    }

    /// Verify the attestation.
    ///
    /// Checks that the attached public key derives the issuer account the
    /// attestation names, then verifies the signature over the
    /// attestation's canonical bytes.
    ///
    /// # Errors
    ///
    /// `IssuanceError::Crypto` with `CryptoError::AccountMismatch` when the
    /// key does not belong to the named issuer, or
    /// `CryptoError::VerificationFailed` when the signature is invalid for
    /// the attestation content.
    pub fn verify(&self) -> Result<(), IssuanceError> {
        let derived = self.public_key.account_id();
        if derived != self.attestation.issuer {
            return Err(IssuanceError::Crypto(CryptoError::AccountMismatch {
                derived: derived.to_string(),
                claimed: self.attestation.issuer.to_string(),
            }));
        }
        let canonical = self.attestation.canonical_bytes()?;
        verify_with_public_key(&canonical, &self.signature, &self.public_key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certledger_core::fingerprint;

    fn fp(label: &str) -> Fingerprint {
        fingerprint(&CanonicalBytes::new(&label).unwrap())
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let kp = Ed25519KeyPair::generate();
        let signed = SignedAttestation::issue(fp("diploma"), &kp).unwrap();
        assert_eq!(signed.attestation.issuer, kp.account_id());
        signed.verify().expect("freshly issued attestation should verify");
    }

    #[test]
    fn test_tampered_fingerprint_fails() {
        let kp = Ed25519KeyPair::generate();
        let mut signed = SignedAttestation::issue(fp("diploma"), &kp).unwrap();
        signed.attestation.fingerprint = fp("forged");
        assert!(signed.verify().is_err());
    }

    #[test]
    fn test_tampered_timestamp_fails() {
        let kp = Ed25519KeyPair::generate();
        let mut signed = SignedAttestation::issue(fp("diploma"), &kp).unwrap();
        signed.attestation.issued_at = Timestamp::parse("2020-01-01T00:00:00Z").unwrap();
        assert!(signed.verify().is_err());
    }

    #[test]
    fn test_signature_from_other_key_fails() {
        let kp = Ed25519KeyPair::generate();
        let other = Ed25519KeyPair::generate();
        let mut signed = SignedAttestation::issue(fp("diploma"), &kp).unwrap();
        let canonical = signed.attestation.canonical_bytes().unwrap();
        signed.signature = other.sign(&canonical);
        assert!(signed.verify().is_err());
    }

    #[test]
    fn test_forged_issuer_account_fails_with_mismatch() {
        let kp = Ed25519KeyPair::generate();
        let victim = Ed25519KeyPair::generate();
        let mut signed = SignedAttestation::issue(fp("diploma"), &kp).unwrap();
        // Claim the victim's account while keeping the signer's key.
        signed.attestation.issuer = victim.account_id();
        match signed.verify().unwrap_err() {
            IssuanceError::Crypto(CryptoError::AccountMismatch { .. }) => {}
            other => panic!("Expected AccountMismatch, got: {other}"),
        }
    }

    #[test]
    fn test_signed_attestation_serde_roundtrip() {
        let kp = Ed25519KeyPair::generate();
        let signed = SignedAttestation::issue(fp("diploma"), &kp).unwrap();
        let json = serde_json::to_string(&signed).unwrap();
        let parsed: SignedAttestation = serde_json::from_str(&json).unwrap();
        parsed.verify().expect("round-tripped attestation should verify");
        assert_eq!(parsed.attestation, signed.attestation);
    }
}
