//! End-to-end registry flow with real keys.
//!
//! Exercises the full path an operator walks: generate institution keys,
//! construct a registry, authorize the institution, fingerprint a
//! certificate payload, submit it with a signed attestation alongside, and
//! verify from the standpoint of an outside party holding only the payload.

use chrono::NaiveDate;

use certledger_core::{AccountId, Timestamp};
use certledger_crypto::Ed25519KeyPair;
use certledger_issuance::{CertificatePayload, SignedAttestation, SubjectId};
use certledger_registry::{Registry, RegistryEvent, RegistryError};

fn sample_payload(institution: AccountId) -> CertificatePayload {
    CertificatePayload {
        certificate_type: "bachelor_degree".to_string(),
        institution,
        subject: SubjectId::derive(
            "Doe",
            "Jane",
            "AB123",
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        ),
        metadata: serde_json::json!({"programme": "Computer Science", "year": 2026}),
        issued_at: Timestamp::parse("2026-08-06T12:00:00Z").unwrap(),
    }
}

#[test]
fn full_issuance_and_verification_flow() {
    // Three parties: administrator, institution, outsider.
    let admin_keys = Ed25519KeyPair::generate();
    let institution_keys = Ed25519KeyPair::generate();
    let outsider_keys = Ed25519KeyPair::generate();

    let admin = admin_keys.account_id();
    let institution = institution_keys.account_id();
    let outsider = outsider_keys.account_id();

    // The deploying caller becomes administrator.
    let mut registry = Registry::new(admin);

    // Administrator authorizes the institution.
    registry.authorize_issuer(admin, institution).unwrap();
    assert!(registry.is_authorized(&institution));
    assert!(!registry.is_authorized(&outsider));

    // The institution fingerprints a payload and issues an attestation.
    let payload = sample_payload(institution);
    let fingerprint = payload.fingerprint().unwrap();
    let attestation = SignedAttestation::issue(fingerprint, &institution_keys).unwrap();
    attestation.verify().unwrap();

    // Submission by the institution succeeds.
    registry
        .register_certificate(institution, fingerprint)
        .unwrap();

    // An outside verifier holding only the payload recomputes the
    // fingerprint and queries the registry.
    let recomputed = sample_payload(institution).fingerprint().unwrap();
    assert_eq!(recomputed, fingerprint);
    assert!(registry.verify_certificate(&recomputed));

    // The outsider cannot submit anything.
    let foreign = sample_payload(outsider).fingerprint().unwrap();
    let err = registry
        .register_certificate(outsider, foreign)
        .unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized { caller, .. } if caller == outsider));
    assert!(!registry.verify_certificate(&foreign));

    // The journal shows exactly the two successful mutations, in order.
    let events: Vec<_> = registry.journal().iter().map(|e| &e.event).collect();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        RegistryEvent::IssuerAuthorized { issuer } if *issuer == institution
    ));
    assert!(matches!(
        events[1],
        RegistryEvent::CertificateRegistered { fingerprint: f, submitter }
            if *f == fingerprint && *submitter == institution
    ));
}

#[test]
fn snapshot_survives_persistence() {
    let admin_keys = Ed25519KeyPair::generate();
    let institution_keys = Ed25519KeyPair::generate();
    let admin = admin_keys.account_id();
    let institution = institution_keys.account_id();

    let mut registry = Registry::new(admin);
    registry.authorize_issuer(admin, institution).unwrap();
    let fingerprint = sample_payload(institution).fingerprint().unwrap();
    registry
        .register_certificate(institution, fingerprint)
        .unwrap();

    // Round-trip through JSON, as the CLI snapshot store does.
    let json = serde_json::to_string_pretty(&registry).unwrap();
    let restored: Registry = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.administrator(), registry.administrator());
    assert!(restored.is_authorized(&institution));
    assert!(restored.verify_certificate(&fingerprint));
    assert_eq!(restored.journal().entries(), registry.journal().entries());

    // The restored registry still enforces capabilities.
    let mut restored = restored;
    let err = restored
        .register_certificate(admin, fingerprint)
        .unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized { .. }));
}
