//! `dor --create <path>` – write missing checksum sidecars.

use anyhow::{Context, Result};
use dor_core::pipeline::{create_checksums, RunSettings, RunSummary};
use std::io;
use std::path::Path;

pub fn run_create(root: &Path, settings: &RunSettings) -> Result<RunSummary> {
    let stdout = io::stdout();
    let summary = create_checksums(root, settings, stdout.lock())
        .with_context(|| format!("create checksums under {}", root.display()))?;
    Ok(summary)
}
