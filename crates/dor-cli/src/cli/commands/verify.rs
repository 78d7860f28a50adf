//! `dor --verify <path>` – check files against their sidecars.

use anyhow::{Context, Result};
use dor_core::pipeline::{verify_checksums, RunSettings, RunSummary};
use std::io;
use std::path::Path;

pub fn run_verify(root: &Path, settings: &RunSettings) -> Result<RunSummary> {
    let stdout = io::stdout();
    let summary = verify_checksums(root, settings, stdout.lock())
        .with_context(|| format!("verify checksums under {}", root.display()))?;
    if !summary.is_clean() {
        tracing::warn!(
            failed = summary.not_ok(),
            "verification found files that need attention"
        );
    }
    Ok(summary)
}
