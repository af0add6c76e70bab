//! # Account Derivation
//!
//! Derives a registry [`AccountId`] from an Ed25519 public key: the trailing
//! 20 bytes of the SHA-256 digest of the 32-byte public key.
//!
//! The derivation is the binding between a key pair and a registry identity:
//! an attestation naming an issuer account can be checked against the public
//! key that signed it, and a forged account claim fails that check.

use sha2::{Digest, Sha256};

use certledger_core::{identity::ACCOUNT_ID_LEN, AccountId};

use crate::ed25519::Ed25519PublicKey;

/// Derive the registry account for an Ed25519 public key.
///
/// The address is the trailing 20 bytes of `SHA-256(public_key)`. Every
/// holder of the key pair derives the same account; nobody without the key
/// pair can produce signatures for it.
pub fn derive_account_id(public_key: &Ed25519PublicKey) -> AccountId {
    let digest = Sha256::digest(public_key.as_bytes());
    let mut addr = [0u8; ACCOUNT_ID_LEN];
    addr.copy_from_slice(&digest[digest.len() - ACCOUNT_ID_LEN..]);
    AccountId::from_bytes(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ed25519::Ed25519KeyPair;

    #[test]
    fn test_known_derivation_vector() {
        // SHA256 of 32 0x01 bytes is
        // 72cd6e8422c407fb6d098690f1130b7ded7ec2f7f5e1d30bd9d521f015363793;
        // the account is its trailing 20 bytes.
        let pk = Ed25519PublicKey::from_bytes([1u8; 32]);
        let account = derive_account_id(&pk);
        assert_eq!(
            account.to_string(),
            "0xf1130b7ded7ec2f7f5e1d30bd9d521f015363793"
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let kp = Ed25519KeyPair::generate();
        assert_eq!(kp.account_id(), kp.public_key().account_id());
        assert_eq!(kp.account_id(), derive_account_id(&kp.public_key()));
    }

    #[test]
    fn test_distinct_keys_distinct_accounts() {
        let a = Ed25519KeyPair::generate().account_id();
        let b = Ed25519KeyPair::generate().account_id();
        assert_ne!(a, b);
    }
}
