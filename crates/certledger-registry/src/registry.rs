//! # Registry State Machine
//!
//! Two independent monotonic sets gated by two distinct capability checks:
//! the administrator (fixed at construction) writes the issuer set; members
//! of the issuer set write the certificate set. All reads are universally
//! accessible and side-effect-free.
//!
//! ## State Machine Summary
//!
//! ```text
//!                 administrator only            issuer only
//! authorize_issuer ──▶ issuers (append-only) ◀─ membership check
//!                                                    │
//! register_certificate ─────────────────────▶ certificates (append-only)
//!
//! is_authorized / verify_certificate: anyone, pure reads
//! ```
//!
//! Both mutations are idempotent: inserting a member that is already
//! present succeeds and changes nothing, journal included. Neither set has
//! a removal path.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use certledger_core::{AccountId, Fingerprint, Timestamp};

use crate::journal::{Journal, RegistryEvent};

// ─── Errors ──────────────────────────────────────────────────────────

/// The capability a rejected caller was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    /// Administrator capability: held only by the account the registry was
    /// constructed with.
    Administrator,
    /// Issuer capability: membership in the authorized issuer set.
    Issuer,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Administrator => "administrator",
            Self::Issuer => "issuer",
        };
        f.write_str(s)
    }
}

/// Errors raised by registry operations.
///
/// There is a single kind: a caller invoked a capability-gated operation
/// without holding the capability. Every error is caller-correctable and
/// leaves the registry unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller does not hold the required capability.
    #[error("caller {caller} does not hold the {capability} capability")]
    Unauthorized {
        /// The rejected caller.
        caller: AccountId,
        /// The capability the operation requires.
        capability: Capability,
    },
}

// ─── Registry ────────────────────────────────────────────────────────

/// The certificate registry.
///
/// All fields are private: external code can observe or mutate the state
/// only through the operations below. The whole registry, journal included,
/// serializes to JSON for snapshot persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    /// The single identity allowed to authorize issuers. Immutable.
    administrator: AccountId,
    /// Accounts holding the issuer capability. Append-only.
    issuers: BTreeSet<AccountId>,
    /// Registered certificate fingerprints. Append-only.
    certificates: BTreeSet<Fingerprint>,
    /// Ordered log of every state-changing mutation.
    journal: Journal,
    /// When the registry was constructed.
    created_at: Timestamp,
}

impl Registry {
    /// Construct a registry with the given administrator.
    ///
    /// Construction is a one-time lifecycle event: the administrator is
    /// fixed here and never changes. The registry starts with no issuers,
    /// no certificates, and an empty journal.
    pub fn new(administrator: AccountId) -> Self {
        Self {
            administrator,
            issuers: BTreeSet::new(),
            certificates: BTreeSet::new(),
            journal: Journal::new(),
            created_at: Timestamp::now(),
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Grant the issuer capability to `issuer`.
    ///
    /// Only the administrator may call this. Idempotent: authorizing an
    /// already-authorized account succeeds and changes nothing. No
    /// validation is performed on `issuer` beyond well-formedness — the
    /// zero account and the administrator's own account are accepted.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Unauthorized`] when `caller` is not the
    /// administrator; the registry is left unchanged.
    pub fn authorize_issuer(
        &mut self,
        caller: AccountId,
        issuer: AccountId,
    ) -> Result<(), RegistryError> {
        if caller != self.administrator {
            return Err(RegistryError::Unauthorized {
                caller,
                capability: Capability::Administrator,
            });
        }
        if self.issuers.insert(issuer) {
            self.journal.append(RegistryEvent::IssuerAuthorized { issuer });
        }
        Ok(())
    }

    /// Record a certificate fingerprint.
    ///
    /// Only an authorized issuer may call this; the administrator holds no
    /// implicit issuer capability. Re-submitting a fingerprint already
    /// present is a no-op success — "already registered" is consistent
    /// with, not conflicting with, the requested end state.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Unauthorized`] when `caller` is not an authorized
    /// issuer; the registry is left unchanged.
    pub fn register_certificate(
        &mut self,
        caller: AccountId,
        fingerprint: Fingerprint,
    ) -> Result<(), RegistryError> {
        if !self.issuers.contains(&caller) {
            return Err(RegistryError::Unauthorized {
                caller,
                capability: Capability::Issuer,
            });
        }
        if self.certificates.insert(fingerprint) {
            self.journal.append(RegistryEvent::CertificateRegistered {
                fingerprint,
                submitter: caller,
            });
        }
        Ok(())
    }

    // ── Reads (anyone, no side effects) ──────────────────────────────

    /// True iff `fingerprint` has been registered.
    pub fn verify_certificate(&self, fingerprint: &Fingerprint) -> bool {
        self.certificates.contains(fingerprint)
    }

    /// True iff `account` holds the issuer capability.
    pub fn is_authorized(&self, account: &AccountId) -> bool {
        self.issuers.contains(account)
    }

    /// The administrator identity.
    pub fn administrator(&self) -> &AccountId {
        &self.administrator
    }

    /// Number of authorized issuers.
    pub fn issuer_count(&self) -> usize {
        self.issuers.len()
    }

    /// Number of registered certificates.
    pub fn certificate_count(&self) -> usize {
        self.certificates.len()
    }

    /// Iterate over authorized issuers in address order.
    pub fn issuers(&self) -> impl Iterator<Item = &AccountId> {
        self.issuers.iter()
    }

    /// The mutation journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// When the registry was constructed.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
