//! # Keygen Subcommand
//!
//! Generates an Ed25519 key pair for an issuing institution (or the
//! administrator), writes the private seed to a key file, and prints the
//! public key and the derived registry account.
//!
//! The seed file is the caller's responsibility to protect; no other
//! subcommand reads private key material.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use certledger_crypto::Ed25519KeyPair;

/// Arguments for the `certledger keygen` subcommand.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Path to write the private key seed (hex) to.
    #[arg(long)]
    pub seed_out: PathBuf,

    /// Overwrite an existing seed file.
    #[arg(long)]
    pub force: bool,
}

/// Execute the keygen subcommand.
pub fn run_keygen(args: &KeygenArgs) -> Result<u8> {
    if args.seed_out.exists() && !args.force {
        bail!(
            "seed file already exists (pass --force to overwrite): {}",
            args.seed_out.display()
        );
    }

    let keypair = Ed25519KeyPair::generate();
    std::fs::write(&args.seed_out, format!("{}\n", keypair.to_seed_hex()))
        .with_context(|| format!("failed to write seed file {}", args.seed_out.display()))?;

    tracing::info!(path = %args.seed_out.display(), "wrote key seed");
    println!("public_key: {}", keypair.public_key());
    println!("account:    {}", keypair.account_id());
    Ok(0)
}

/// Load a key pair from a seed file written by `keygen`.
pub fn load_keypair(path: &Path) -> Result<Ed25519KeyPair> {
    let hex = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    Ed25519KeyPair::from_seed_hex(hex.trim())
        .with_context(|| format!("invalid seed file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keygen_writes_loadable_seed() {
        let dir = tempfile::tempdir().unwrap();
        let seed_path = dir.path().join("issuer.key");
        let args = KeygenArgs {
            seed_out: seed_path.clone(),
            force: false,
        };

        assert_eq!(run_keygen(&args).unwrap(), 0);
        let keypair = load_keypair(&seed_path).unwrap();
        assert_eq!(keypair.public_key().as_bytes().len(), 32);
    }

    #[test]
    fn test_keygen_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let seed_path = dir.path().join("issuer.key");
        let args = KeygenArgs {
            seed_out: seed_path,
            force: false,
        };

        run_keygen(&args).unwrap();
        assert!(run_keygen(&args).is_err());
    }

    #[test]
    fn test_keygen_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let seed_path = dir.path().join("issuer.key");

        run_keygen(&KeygenArgs {
            seed_out: seed_path.clone(),
            force: false,
        })
        .unwrap();
        let first = load_keypair(&seed_path).unwrap().public_key();

        run_keygen(&KeygenArgs {
            seed_out: seed_path.clone(),
            force: true,
        })
        .unwrap();
        let second = load_keypair(&seed_path).unwrap().public_key();

        assert_ne!(first, second);
    }
}
