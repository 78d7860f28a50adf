//! Pipeline error types.

use crate::checksum::HashError;
use crate::sidecar::SidecarError;
use crate::walker::{WalkEntryError, WalkError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Aborts a whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Walk(#[from] WalkError),
    /// The status/summary stream itself failed (e.g. closed stdout).
    #[error("write report: {0}")]
    Report(#[from] io::Error),
}

/// Affects one file only; reported as FAILED and the run continues.
#[derive(Debug, Error)]
pub enum FileError {
    #[error(transparent)]
    Hash(#[from] HashError),
    #[error(transparent)]
    Sidecar(#[from] SidecarError),
    #[error(transparent)]
    Walk(#[from] WalkEntryError),
    #[error("{} is a symlink to a missing target", path.display())]
    DanglingLink { path: PathBuf },
    #[error("{} has no data file at {}", sidecar.display(), data.display())]
    MissingCounterpart { sidecar: PathBuf, data: PathBuf },
}
