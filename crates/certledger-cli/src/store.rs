//! # Snapshot Store
//!
//! Loads and saves the registry as a pretty-printed JSON snapshot file.
//! `create` refuses to overwrite an existing snapshot — a registry is
//! constructed exactly once.

use std::path::Path;

use anyhow::{bail, Context, Result};

use certledger_registry::Registry;

/// Load a registry snapshot from `path`.
pub fn load(path: &Path) -> Result<Registry> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read registry snapshot {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse registry snapshot {}", path.display()))
}

/// Persist a registry snapshot to `path`, overwriting.
pub fn save(path: &Path, registry: &Registry) -> Result<()> {
    let mut json = serde_json::to_string_pretty(registry).context("failed to serialize registry")?;
    json.push('\n');
    std::fs::write(path, json)
        .with_context(|| format!("failed to write registry snapshot {}", path.display()))
}

/// Persist a freshly constructed registry, refusing to overwrite.
pub fn create(path: &Path, registry: &Registry) -> Result<()> {
    if path.exists() {
        bail!("registry snapshot already exists: {}", path.display());
    }
    save(path, registry)
}
