//! # certledger-cli — CLI Tool for Certledger
//!
//! Provides the `certledger` command-line interface. Registry state lives
//! in a JSON snapshot file; every mutating command loads the snapshot,
//! applies one registry operation, and persists the result only on success,
//! so a rejected mutation leaves the snapshot byte-identical.
//!
//! ## Subcommands
//!
//! - `certledger keygen` — generate an institution key pair.
//! - `certledger init` — construct a registry snapshot.
//! - `certledger authorize` — grant the issuer capability (administrator only).
//! - `certledger submit` — register a certificate fingerprint (issuer only).
//! - `certledger verify` — check whether a fingerprint is registered.
//! - `certledger status` — administrator, counts, authorization queries.
//! - `certledger journal` — print the ordered mutation journal.
//! - `certledger fingerprint` — fingerprint a payload file offline.

pub mod keys;
pub mod payload;
pub mod registry;
pub mod store;
