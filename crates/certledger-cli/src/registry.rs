//! # Registry Subcommands
//!
//! The commands that operate on a registry snapshot: `init`, `authorize`,
//! `submit`, `verify`, `status`, and `journal`.
//!
//! Mutating commands load the snapshot, apply exactly one registry
//! operation, and persist only on success. A rejected mutation therefore
//! leaves the snapshot file byte-identical, matching the registry's
//! no-partial-effect guarantee.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use certledger_core::{AccountId, Fingerprint};
use certledger_registry::Registry;

use crate::payload::load_payload;
use crate::store;

/// Arguments for the `certledger init` subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path of the registry snapshot to create.
    #[arg(long)]
    pub registry: PathBuf,

    /// Account that becomes the administrator (0x-hex).
    #[arg(long)]
    pub administrator: String,
}

/// Arguments for the `certledger authorize` subcommand.
#[derive(Args, Debug)]
pub struct AuthorizeArgs {
    /// Path of the registry snapshot.
    #[arg(long)]
    pub registry: PathBuf,

    /// The invoking caller (must be the administrator).
    #[arg(long)]
    pub caller: String,

    /// Account to grant the issuer capability to.
    #[arg(long)]
    pub issuer: String,
}

/// Arguments for the `certledger submit` subcommand.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Path of the registry snapshot.
    #[arg(long)]
    pub registry: PathBuf,

    /// The invoking caller (must be an authorized issuer).
    #[arg(long)]
    pub caller: String,

    /// Fingerprint to register (sha256:<hex>). Mutually exclusive with --payload.
    #[arg(long)]
    pub fingerprint: Option<String>,

    /// Certificate payload file to fingerprint and register.
    #[arg(long)]
    pub payload: Option<PathBuf>,
}

/// Arguments for the `certledger verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path of the registry snapshot.
    #[arg(long)]
    pub registry: PathBuf,

    /// Fingerprint to look up (sha256:<hex>).
    #[arg(long)]
    pub fingerprint: String,
}

/// Arguments for the `certledger status` subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Path of the registry snapshot.
    #[arg(long)]
    pub registry: PathBuf,

    /// Optionally report whether this account is an authorized issuer.
    #[arg(long)]
    pub account: Option<String>,
}

/// Arguments for the `certledger journal` subcommand.
#[derive(Args, Debug)]
pub struct JournalArgs {
    /// Path of the registry snapshot.
    #[arg(long)]
    pub registry: PathBuf,
}

/// Execute the init subcommand.
pub fn run_init(args: &InitArgs) -> Result<u8> {
    let administrator = AccountId::parse(&args.administrator)?;
    let registry = Registry::new(administrator);
    store::create(&args.registry, &registry)?;

    tracing::info!(%administrator, path = %args.registry.display(), "registry created");
    println!("registry created with administrator {administrator}");
    Ok(0)
}

/// Execute the authorize subcommand.
pub fn run_authorize(args: &AuthorizeArgs) -> Result<u8> {
    let caller = AccountId::parse(&args.caller)?;
    let issuer = AccountId::parse(&args.issuer)?;

    let mut registry = store::load(&args.registry)?;
    registry
        .authorize_issuer(caller, issuer)
        .context("authorization rejected")?;
    store::save(&args.registry, &registry)?;

    tracing::info!(%issuer, "issuer authorized");
    println!("authorized {issuer}");
    Ok(0)
}

/// Execute the submit subcommand.
pub fn run_submit(args: &SubmitArgs) -> Result<u8> {
    let caller = AccountId::parse(&args.caller)?;
    let fingerprint = resolve_fingerprint(args)?;

    let mut registry = store::load(&args.registry)?;
    registry
        .register_certificate(caller, fingerprint)
        .context("submission rejected")?;
    store::save(&args.registry, &registry)?;

    tracing::info!(%fingerprint, submitter = %caller, "certificate registered");
    println!("registered {fingerprint}");
    Ok(0)
}

/// Execute the verify subcommand.
///
/// Prints `true` or `false`; the exit code mirrors the answer (0 for
/// registered, 1 for unknown) so scripts can branch without parsing.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let fingerprint = Fingerprint::parse(&args.fingerprint)?;
    let registry = store::load(&args.registry)?;

    let registered = registry.verify_certificate(&fingerprint);
    println!("{registered}");
    Ok(if registered { 0 } else { 1 })
}

/// Execute the status subcommand.
pub fn run_status(args: &StatusArgs) -> Result<u8> {
    let registry = store::load(&args.registry)?;

    println!("administrator: {}", registry.administrator());
    println!("created_at:    {}", registry.created_at());
    println!("issuers:       {}", registry.issuer_count());
    println!("certificates:  {}", registry.certificate_count());
    println!("journal:       {} entries", registry.journal().len());

    if let Some(account) = &args.account {
        let account = AccountId::parse(account)?;
        println!("authorized({account}): {}", registry.is_authorized(&account));
    }
    Ok(0)
}

/// Execute the journal subcommand.
pub fn run_journal(args: &JournalArgs) -> Result<u8> {
    let registry = store::load(&args.registry)?;
    for entry in registry.journal() {
        println!("{:>6}  {}  {}", entry.seq, entry.at, entry.event);
    }
    Ok(0)
}

/// Resolve the fingerprint for a submission from `--fingerprint` or
/// `--payload`, exactly one of which must be given.
fn resolve_fingerprint(args: &SubmitArgs) -> Result<Fingerprint> {
    match (&args.fingerprint, &args.payload) {
        (Some(s), None) => Ok(Fingerprint::parse(s)?),
        (None, Some(path)) => {
            let payload = load_payload(path)?;
            Ok(payload.fingerprint().context("failed to fingerprint payload")?)
        }
        (Some(_), Some(_)) => bail!("--fingerprint and --payload are mutually exclusive"),
        (None, None) => bail!("one of --fingerprint or --payload is required"),
    }
}
