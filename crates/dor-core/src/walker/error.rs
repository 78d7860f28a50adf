//! Traversal errors.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal: the walk cannot start at all.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("cannot access {}: {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Non-fatal: one entry below the root could not be read (permissions,
/// symlink loop, entry vanished mid-walk).
#[derive(Debug)]
pub struct WalkEntryError {
    path: Option<PathBuf>,
    source: walkdir::Error,
}

impl WalkEntryError {
    pub(crate) fn new(source: walkdir::Error) -> Self {
        WalkEntryError {
            path: source.path().map(Path::to_path_buf),
            source,
        }
    }

    /// Offending path, when walkdir knows it.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl fmt::Display for WalkEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(p) => write!(f, "walk {}: {}", p.display(), self.source),
            None => write!(f, "walk: {}", self.source),
        }
    }
}

impl std::error::Error for WalkEntryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
