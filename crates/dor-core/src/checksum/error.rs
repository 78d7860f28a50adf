//! Error type for file hashing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to hash one file. Always per-file; callers decide whether to
/// continue with the next entry.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("{} can't be opened: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HashError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            HashError::Open { path, .. } | HashError::Read { path, .. } => path,
        }
    }

    /// True when the file is simply not there (as opposed to unreadable).
    pub fn is_not_found(&self) -> bool {
        match self {
            HashError::Open { source, .. } => source.kind() == io::ErrorKind::NotFound,
            HashError::Read { .. } => false,
        }
    }
}
