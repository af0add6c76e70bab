//! # Account Identities
//!
//! Defines `AccountId`, the stable caller identity every access-control
//! check in the registry is a function of. An account id is the 20-byte
//! public-key-derived address of a caller, rendered as `0x`-prefixed
//! lowercase hex.
//!
//! The derivation from an Ed25519 public key lives in `certledger-crypto`;
//! this crate only defines the value type, so the registry can be used with
//! identities attested by any host environment.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;
use crate::fingerprint::decode_hex;

/// Number of bytes in an account address.
pub const ACCOUNT_ID_LEN: usize = 20;

/// A caller identity: a 20-byte public-key-derived address.
///
/// Totally ordered and hashable so registries can keep identities in
/// deterministic sorted sets. Serializes as the `0x`-hex string form.
///
/// The all-zero account is an ordinary value — the registry does not
/// special-case it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; ACCOUNT_ID_LEN]);

impl AccountId {
    /// Create an account id from raw address bytes.
    pub fn from_bytes(bytes: [u8; ACCOUNT_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// The all-zero account id.
    pub fn zero() -> Self {
        Self([0u8; ACCOUNT_ID_LEN])
    }

    /// Return the raw 20-byte address.
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }

    /// Parse an account id from a 40-character hex string, with or without
    /// the `0x` prefix. Hex is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAccountId` for wrong length or non-hex
    /// characters.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let hex = s.trim().strip_prefix("0x").unwrap_or(s.trim());
        if hex.len() != ACCOUNT_ID_LEN * 2 {
            return Err(CoreError::InvalidAccountId(format!(
                "account hex must be {} chars, got {}",
                ACCOUNT_ID_LEN * 2,
                hex.len()
            )));
        }
        let mut bytes = [0u8; ACCOUNT_ID_LEN];
        decode_hex(hex, &mut bytes).map_err(CoreError::InvalidAccountId)?;
        Ok(Self(bytes))
    }

    /// Render the address as lowercase hex without the `0x` prefix.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl std::fmt::Debug for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "AccountId(0x{prefix}...)")
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl std::str::FromStr for AccountId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
