//! Recursive directory enumeration.
//!
//! The walker only enumerates; pipelines classify each entry with
//! [`FileEntry::kind`]. Entries within a directory come out sorted by file
//! name so repeated runs report in the same order.

mod entry;
mod error;

pub use entry::{EntryKind, FileEntry, Target};
pub use error::{WalkEntryError, WalkError};

use entry::is_hidden_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Traversal knobs (`[walk]` section of config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOptions {
    /// Descend into symlinked directories. Symlinks to files are always
    /// treated as the files they point to.
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Do not descend into directories whose name starts with `.`.
    #[serde(default)]
    pub skip_hidden_dirs: bool,
}

/// Lazy, single-pass iterator over the non-directory entries below a root.
pub struct Walk {
    inner: walkdir::IntoIter,
    skip_hidden_dirs: bool,
}

impl Iterator for Walk {
    type Item = Result<FileEntry, WalkEntryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(WalkEntryError::new(e))),
            };
            let file_type = entry.file_type();
            if file_type.is_dir() {
                if self.skip_hidden_dirs && entry.depth() > 0 && is_hidden_name(entry.file_name()) {
                    tracing::debug!(path = %entry.path().display(), "skipping hidden directory");
                    self.inner.skip_current_dir();
                }
                continue;
            }
            let target = if file_type.is_symlink() {
                resolve_link(entry.path())
            } else if file_type.is_file() {
                Target::File
            } else {
                Target::Other
            };
            return Some(Ok(FileEntry::new(entry.into_path(), target)));
        }
    }
}

/// Links are resolved for classification only; linked directories are not
/// descended unless `follow_symlinks` is set.
fn resolve_link(path: &Path) -> Target {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Target::File,
        Ok(_) => Target::Other,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "dangling symlink");
            Target::Dangling
        }
    }
}

/// Start a walk at `root`, which must be an existing directory.
pub fn walk(root: &Path, options: &WalkOptions) -> Result<Walk, WalkError> {
    let meta = fs::metadata(root).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            WalkError::NotFound {
                path: root.to_path_buf(),
            }
        } else {
            WalkError::Inaccessible {
                path: root.to_path_buf(),
                source,
            }
        }
    })?;
    if !meta.is_dir() {
        return Err(WalkError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let inner = WalkDir::new(root)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name()
        .into_iter();
    Ok(Walk {
        inner,
        skip_hidden_dirs: options.skip_hidden_dirs,
    })
}
