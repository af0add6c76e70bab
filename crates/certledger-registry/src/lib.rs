//! # certledger-registry — The Registry State Machine
//!
//! The registry owns three pieces of durable state: the administrator
//! identity (fixed at construction), the set of authorized issuers, and the
//! set of registered certificate fingerprints. Two capability checks gate
//! the two mutations:
//!
//! - only the administrator may authorize an issuer;
//! - only an authorized issuer may register a certificate.
//!
//! Both sets are append-only with idempotent insertion; reads are
//! universally accessible and side-effect-free. Every state-changing
//! mutation appends an entry to an ordered journal that external observers
//! can replay.
//!
//! ## Design
//!
//! Caller identity is an explicit [`certledger_core::AccountId`] parameter
//! on every mutating operation — the access-control decision is a pure
//! function of (state, caller, arguments), with no ambient execution
//! context. This keeps the core independently testable without any hosting
//! environment.
//!
//! The registry is a synchronous, single-writer, in-memory state machine.
//! Rejections return before any mutation, so an operation either completes
//! in full (state updated, journal appended) or has no effect at all.

pub mod journal;
pub mod registry;

pub use journal::{Journal, JournalEntry, RegistryEvent};
pub use registry::{Capability, Registry, RegistryError};
