//! # Fingerprint Subcommand
//!
//! Computes the fingerprint of a certificate payload file without touching
//! any registry. Issuers run this before submission; verifiers run it to
//! recompute the fingerprint of a document they were handed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use certledger_issuance::CertificatePayload;

/// Arguments for the `certledger fingerprint` subcommand.
#[derive(Args, Debug)]
pub struct FingerprintArgs {
    /// Path to a certificate payload JSON file.
    #[arg(long)]
    pub payload: PathBuf,
}

/// Read and parse a certificate payload file.
pub fn load_payload(path: &Path) -> Result<CertificatePayload> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read payload file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse payload file {}", path.display()))
}

/// Execute the fingerprint subcommand.
pub fn run_fingerprint(args: &FingerprintArgs) -> Result<u8> {
    let payload = load_payload(&args.payload)?;
    let fingerprint = payload
        .fingerprint()
        .context("failed to fingerprint payload")?;
    println!("{fingerprint}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_payload(dir: &Path) -> PathBuf {
        let path = dir.join("payload.json");
        let json = serde_json::json!({
            "certificate_type": "bachelor_degree",
            "institution": "0x0505050505050505050505050505050505050505",
            "subject": "f08470e283b6a6e",
            "metadata": {"year": 2026},
            "issued_at": "2026-08-06T12:00:00Z"
        });
        std::fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_load_payload_and_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_payload(dir.path());

        let payload = load_payload(&path).unwrap();
        assert_eq!(payload.certificate_type, "bachelor_degree");

        let args = FingerprintArgs { payload: path };
        assert_eq!(run_fingerprint(&args).unwrap(), 0);
    }

    #[test]
    fn test_load_payload_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        std::fs::write(&path, "{\"certificate_type\": 1}").unwrap();
        assert!(load_payload(&path).is_err());
    }

    #[test]
    fn test_fingerprint_rejects_float_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        let json = serde_json::json!({
            "certificate_type": "transcript",
            "institution": "0x0505050505050505050505050505050505050505",
            "subject": "f08470e283b6a6e",
            "metadata": {"gpa": 3.9},
            "issued_at": "2026-08-06T12:00:00Z"
        });
        std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

        let args = FingerprintArgs { payload: path };
        assert!(run_fingerprint(&args).is_err());
    }
}
