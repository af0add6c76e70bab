//! # certledger-crypto — Cryptographic Primitives for Certledger
//!
//! Ed25519 key pairs, signatures, and the public-key → account-id
//! derivation that gives callers their registry identity.
//!
//! ## Security Invariants
//!
//! - Signing input MUST be `&CanonicalBytes` — raw bytes cannot be signed.
//!   Everything signed in this workspace went through the canonicalization
//!   pipeline, so signatures verify across independent implementations.
//! - Private keys are never serialized implicitly. `Ed25519KeyPair` does not
//!   implement `Serialize`; seed export is an explicit, documented call used
//!   only by the CLI keystore.

pub mod account;
pub mod ed25519;

pub use account::derive_account_id;
pub use ed25519::{verify, verify_with_public_key, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
