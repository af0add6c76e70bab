//! # certledger-issuance — Issuer-Side Tooling
//!
//! What an issuing institution does before touching the registry: assemble
//! a certificate payload, derive its fingerprint, and produce a signed
//! attestation binding the fingerprint to the issuer's account.
//!
//! The registry stays content-blind — nothing in this crate enters registry
//! state. Only the fingerprint does, and any holder of the payload can
//! recompute it and check the registry.
//!
//! ## Flow
//!
//! 1. Build a [`CertificatePayload`] (certificate type, institution,
//!    subject, metadata, issuance time).
//! 2. [`CertificatePayload::fingerprint()`] canonicalizes and hashes it.
//! 3. [`SignedAttestation::issue()`] signs the fingerprint with the
//!    institution's key pair.
//! 4. The fingerprint is submitted to the registry; the signed attestation
//!    travels with the certificate document.

pub mod attestation;
pub mod payload;

pub use attestation::{IssuanceAttestation, IssuanceError, SignedAttestation};
pub use payload::{CertificatePayload, SubjectId};
