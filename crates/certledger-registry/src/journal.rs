//! # Mutation Journal
//!
//! The durable, ordered log of registry mutations. Each successful
//! state-changing operation appends one entry; entries are never removed or
//! rewritten. External observers replay the journal to reconstruct the
//! registry's history, and all observers see entries in the same order.
//!
//! There are deliberately no removal event variants: the registry's sets
//! are append-only, and the event vocabulary encodes that.

use serde::{Deserialize, Serialize};

use certledger_core::{AccountId, Fingerprint, Timestamp};

/// A registry mutation, as recorded in the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// The administrator granted issuer capability to an account.
    IssuerAuthorized {
        /// The newly authorized account.
        issuer: AccountId,
    },
    /// An authorized issuer registered a certificate fingerprint.
    CertificateRegistered {
        /// The registered fingerprint.
        fingerprint: Fingerprint,
        /// The issuer that submitted it.
        submitter: AccountId,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IssuerAuthorized { issuer } => {
                write!(f, "issuer_authorized {issuer}")
            }
            Self::CertificateRegistered {
                fingerprint,
                submitter,
            } => {
                write!(f, "certificate_registered {fingerprint} by {submitter}")
            }
        }
    }
}

/// One journal entry: a sequence number, a timestamp, and the event.
///
/// Sequence numbers start at 0 and are contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Position of this entry in the journal.
    pub seq: u64,
    /// When the mutation was applied.
    pub at: Timestamp,
    /// The recorded mutation.
    pub event: RegistryEvent,
}

/// The append-only journal.
///
/// The inner vector is private; the only mutation is [`Journal::append`],
/// which assigns the next sequence number. Recorded entries cannot be
/// altered through this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal(Vec<JournalEntry>);

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, stamping it with the next sequence number and the
    /// current time. Returns the sequence number assigned.
    pub fn append(&mut self, event: RegistryEvent) -> u64 {
        let seq = self.0.len() as u64;
        self.0.push(JournalEntry {
            seq,
            at: Timestamp::now(),
            event,
        });
        seq
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The recorded entries, in order.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.0
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, JournalEntry> {
        self.0.iter()
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&JournalEntry> {
        self.0.last()
    }
}

impl<'a> IntoIterator for &'a Journal {
    type Item = &'a JournalEntry;
    type IntoIter = std::slice::Iter<'a, JournalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certledger_core::{fingerprint, CanonicalBytes};

    fn account(n: u8) -> AccountId {
        AccountId::from_bytes([n; 20])
    }

    fn fp(label: &str) -> Fingerprint {
        fingerprint(&CanonicalBytes::new(&label).unwrap())
    }

    #[test]
    fn test_sequence_numbers_are_contiguous() {
        let mut journal = Journal::new();
        assert!(journal.is_empty());

        let s0 = journal.append(RegistryEvent::IssuerAuthorized { issuer: account(1) });
        let s1 = journal.append(RegistryEvent::CertificateRegistered {
            fingerprint: fp("a"),
            submitter: account(1),
        });
        let s2 = journal.append(RegistryEvent::IssuerAuthorized { issuer: account(2) });

        assert_eq!((s0, s1, s2), (0, 1, 2));
        assert_eq!(journal.len(), 3);
        let seqs: Vec<u64> = journal.iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
    }

    #[test]
    fn test_entries_preserve_event_payload() {
        let mut journal = Journal::new();
        journal.append(RegistryEvent::CertificateRegistered {
            fingerprint: fp("diploma"),
            submitter: account(7),
        });

        match &journal.last().unwrap().event {
            RegistryEvent::CertificateRegistered {
                fingerprint,
                submitter,
            } => {
                assert_eq!(*fingerprint, fp("diploma"));
                assert_eq!(*submitter, account(7));
            }
            other => panic!("unexpected event: {other}"),
        }
    }

    #[test]
    fn test_event_display() {
        let event = RegistryEvent::IssuerAuthorized { issuer: account(3) };
        let s = event.to_string();
        assert!(s.starts_with("issuer_authorized 0x"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut journal = Journal::new();
        journal.append(RegistryEvent::IssuerAuthorized { issuer: account(1) });
        journal.append(RegistryEvent::CertificateRegistered {
            fingerprint: fp("x"),
            submitter: account(1),
        });

        let json = serde_json::to_string(&journal).unwrap();
        let parsed: Journal = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, journal);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = RegistryEvent::IssuerAuthorized { issuer: account(1) };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "issuer_authorized");
    }
}
