//! One traversal step and its classification.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// How a pipeline should treat an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular, not hidden, not a sidecar: a Create candidate.
    Data,
    /// Regular file carrying the checksum extension.
    Sidecar,
    /// Regular file whose name starts with `.`.
    Hidden,
    /// Anything that is not a regular file (unfollowed symlink, fifo, socket).
    Other,
}

/// What a non-directory entry resolves to. Symlinks are resolved, so a link
/// to a regular file counts as a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    File,
    /// Symlink whose target is missing or unreadable.
    Dangling,
    /// Fifo, socket, device, or a link to a directory (never descended).
    Other,
}

/// A non-directory entry yielded by [`super::Walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    target: Target,
}

impl FileEntry {
    pub(crate) fn new(path: PathBuf, target: Target) -> Self {
        FileEntry { path, target }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    pub fn extension(&self) -> Option<&OsStr> {
        self.path.extension()
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Regular file, directly or through a symlink.
    pub fn is_file(&self) -> bool {
        self.target == Target::File
    }

    pub fn is_dangling(&self) -> bool {
        self.target == Target::Dangling
    }

    pub fn is_hidden(&self) -> bool {
        self.file_name().is_some_and(is_hidden_name)
    }

    /// Classify against the sidecar extension `ext` (without the dot).
    /// The extension check wins over the hidden check, so `.x.md5` is a sidecar.
    /// Dangling links are classified by name so pipelines can report them.
    pub fn kind(&self, ext: &str) -> EntryKind {
        if self.target == Target::Other {
            EntryKind::Other
        } else if self.extension() == Some(OsStr::new(ext)) {
            EntryKind::Sidecar
        } else if self.is_hidden() {
            EntryKind::Hidden
        } else {
            EntryKind::Data
        }
    }
}

pub(crate) fn is_hidden_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
