//! Create and Verify pipelines.
//!
//! Both are single-pass folds over a fresh [`crate::walker::walk`]: each
//! entry is classified, handled to completion, and reported before the next
//! one is read. Per-file problems become FAILED lines; only a bad root or a
//! broken report stream aborts a run.

mod create;
mod error;
mod report;
mod verify;

pub use create::create_checksums;
pub use error::{FileError, PipelineError};
pub use report::{Mode, Reporter, RunSummary, Status, BANNER};
pub use verify::verify_checksums;

use crate::checksum::{Algorithm, DEFAULT_BUF_SIZE};
use crate::walker::WalkOptions;

/// Effective settings for one run (config file merged with CLI flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub algorithm: Algorithm,
    /// Sidecar extension without the leading dot.
    pub extension: String,
    pub read_buffer_bytes: usize,
    pub walk: WalkOptions,
}

impl RunSettings {
    /// Defaults for `algorithm`, with its conventional sidecar extension.
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        RunSettings {
            algorithm,
            extension: algorithm.default_extension().to_string(),
            read_buffer_bytes: DEFAULT_BUF_SIZE,
            walk: WalkOptions::default(),
        }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self::for_algorithm(Algorithm::default())
    }
}
