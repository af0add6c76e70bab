//! # certledger CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use certledger_cli::keys::{run_keygen, KeygenArgs};
use certledger_cli::payload::{run_fingerprint, FingerprintArgs};
use certledger_cli::registry::{
    run_authorize, run_init, run_journal, run_status, run_submit, run_verify, AuthorizeArgs,
    InitArgs, JournalArgs, StatusArgs, SubmitArgs, VerifyArgs,
};

/// Certledger CLI — authorization-gated certificate registry.
///
/// Records content-addressed certificate fingerprints in a JSON snapshot
/// and answers verification queries. The administrator authorizes issuing
/// institutions; authorized issuers submit fingerprints; anyone verifies.
#[derive(Parser, Debug)]
#[command(name = "certledger", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an Ed25519 key pair and print its registry account.
    Keygen(KeygenArgs),

    /// Construct a registry snapshot with the given administrator.
    Init(InitArgs),

    /// Grant the issuer capability to an account (administrator only).
    Authorize(AuthorizeArgs),

    /// Register a certificate fingerprint (authorized issuers only).
    Submit(SubmitArgs),

    /// Check whether a fingerprint is registered.
    Verify(VerifyArgs),

    /// Show administrator, counts, and authorization status.
    Status(StatusArgs),

    /// Print the ordered mutation journal.
    Journal(JournalArgs),

    /// Fingerprint a certificate payload file offline.
    Fingerprint(FingerprintArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Keygen(args) => run_keygen(&args),
        Commands::Init(args) => run_init(&args),
        Commands::Authorize(args) => run_authorize(&args),
        Commands::Submit(args) => run_submit(&args),
        Commands::Verify(args) => run_verify(&args),
        Commands::Status(args) => run_status(&args),
        Commands::Journal(args) => run_journal(&args),
        Commands::Fingerprint(args) => run_fingerprint(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_init() {
        let cli = Cli::try_parse_from([
            "certledger",
            "init",
            "--registry",
            "registry.json",
            "--administrator",
            "0xadadadadadadadadadadadadadadadadadadadad",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn cli_parse_submit_with_fingerprint() {
        let cli = Cli::try_parse_from([
            "certledger",
            "submit",
            "--registry",
            "registry.json",
            "--caller",
            "0x0101010101010101010101010101010101010101",
            "--fingerprint",
            "sha256:0d42e03d6518f1c4617b1de1678c073a76953ea8acf22e3d7cacf189c53451e9",
        ])
        .unwrap();
        if let Commands::Submit(args) = cli.command {
            assert!(args.fingerprint.is_some());
            assert!(args.payload.is_none());
        } else {
            panic!("expected submit");
        }
    }

    #[test]
    fn cli_parse_verbosity_is_counted() {
        let cli = Cli::try_parse_from([
            "certledger",
            "-vv",
            "journal",
            "--registry",
            "registry.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["certledger", "revoke"]).is_err());
    }
}
