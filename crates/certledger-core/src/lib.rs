//! # certledger-core — Foundational Types for Certledger
//!
//! This crate is the bedrock of the Certledger workspace. It defines the
//! type-system primitives every other crate builds on; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountId`, `Fingerprint`,
//!    `SubjectId` (in the issuance crate) — no bare strings or byte slices
//!    for identifiers.
//!
//! 2. **`CanonicalBytes` newtype.** ALL fingerprint computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for hashing.
//!    Two implementations that disagree on serialization would disagree on
//!    every fingerprint, so the canonical path is enforced by construction.
//!
//! 3. **`fingerprint()` accepts only `&CanonicalBytes`.** Compile-time
//!    enforcement that hashed bytes came through canonicalization.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, keeping canonical byte sequences
//!    deterministic across time zones.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `certledger-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and serialize with serde.

pub mod canonical;
pub mod error;
pub mod fingerprint;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use error::{CanonicalizationError, CoreError, CryptoError};
pub use fingerprint::{fingerprint, DigestAlgorithm, Fingerprint};
pub use identity::AccountId;
pub use temporal::Timestamp;
