//! Verify pipeline: recompute each sidecar's data file digest and compare.

use super::{FileError, Mode, PipelineError, Reporter, RunSettings, RunSummary, Status};
use crate::checksum::{self, HexDigest};
use crate::sidecar;
use crate::walker::{self, EntryKind};
use std::io::Write;
use std::path::Path;

/// Walk `root` and check every sidecar against its data file. Status lines
/// name the data file, not the sidecar.
pub fn verify_checksums<W: Write>(
    root: &Path,
    settings: &RunSettings,
    out: W,
) -> Result<RunSummary, PipelineError> {
    let entries = walker::walk(root, &settings.walk)?;
    tracing::info!(
        root = %root.display(),
        algorithm = %settings.algorithm,
        extension = %settings.extension,
        "verifying checksums"
    );

    let mut report = Reporter::new(Mode::Verify, out);
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                report.record_error(&path, &FileError::from(e))?;
                continue;
            }
        };
        if entry.kind(&settings.extension) != EntryKind::Sidecar {
            continue;
        }
        let Some(data) = sidecar::data_path(entry.path(), &settings.extension) else {
            continue;
        };
        if entry.is_dangling() {
            let err = FileError::DanglingLink {
                path: entry.path().to_path_buf(),
            };
            report.record_error(&data, &err)?;
            continue;
        }
        match verify_one(entry.path(), &data, settings) {
            Ok(status) => report.record(&data, status)?,
            Err(e) => report.record_error(&data, &e)?,
        }
    }

    let summary = report.finish()?;
    tracing::info!(
        total = summary.total,
        ok = summary.ok,
        errors = summary.errors,
        "verify finished"
    );
    Ok(summary)
}

fn verify_one(sidecar_path: &Path, data: &Path, settings: &RunSettings) -> Result<Status, FileError> {
    let actual = checksum::hash_path(data, settings.algorithm, settings.read_buffer_bytes)
        .map_err(|e| {
            if e.is_not_found() {
                FileError::MissingCounterpart {
                    sidecar: sidecar_path.to_path_buf(),
                    data: data.to_path_buf(),
                }
            } else {
                FileError::Hash(e)
            }
        })?;
    let stored = sidecar::read_stored_digest(sidecar_path, settings.algorithm)?;

    if actual.matches(&stored) {
        return Ok(Status::Ok);
    }
    match HexDigest::parse(settings.algorithm, &stored) {
        Ok(expected) => tracing::warn!(
            path = %data.display(),
            expected = %expected,
            actual = %actual,
            "digest mismatch"
        ),
        Err(e) => tracing::warn!(
            path = %data.display(),
            error = %e,
            "sidecar does not hold a valid digest"
        ),
    }
    Ok(Status::Failed)
}
