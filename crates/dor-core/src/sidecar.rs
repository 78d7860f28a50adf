//! Sidecar naming and I/O.
//!
//! A sidecar sits next to its data file and is named by appending the
//! checksum extension to the data file's full name (`a.txt` -> `a.txt.md5`).
//! Its entire content is the lowercase hex digest, with no trailing newline.
//!
//! New sidecars are written to a hidden `.part` file, synced, and then linked
//! into place, so an interrupted run never leaves a truncated sidecar behind
//! and an existing sidecar is never replaced.

use crate::checksum::{Algorithm, HexDigest};
use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

#[derive(Debug, Error)]
pub enum SidecarError {
    #[error("read sidecar {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("sidecar {} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },
    #[error("write sidecar {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of [`write_sidecar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Another sidecar appeared at the target path; it was left untouched.
    AlreadyExists,
}

/// `<data>.<ext>`.
pub fn sidecar_path(data: &Path, ext: &str) -> PathBuf {
    let mut s = data.as_os_str().to_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Inverse of [`sidecar_path`]; `None` if `sidecar` does not end in `.<ext>`.
pub fn data_path(sidecar: &Path, ext: &str) -> Option<PathBuf> {
    if sidecar.extension() != Some(OsStr::new(ext)) {
        return None;
    }
    let stem = sidecar.file_stem()?;
    Some(sidecar.with_file_name(stem))
}

/// Hidden temp path used while writing `sidecar`.
pub fn temp_path(sidecar: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(sidecar.file_name().unwrap_or_default());
    name.push(TEMP_SUFFIX);
    sidecar.with_file_name(name)
}

/// Whether anything (file, dir, dangling link) already occupies `path`.
pub fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Read the stored digest verbatim. Whitespace is kept, so a sidecar edited
/// to end in a newline no longer matches.
///
/// At most `algorithm.hex_len() + 1` bytes are read: anything longer cannot
/// match, and a large file that merely carries the extension stays cheap.
pub fn read_stored_digest(path: &Path, algorithm: Algorithm) -> Result<String, SidecarError> {
    let read_err = |source| SidecarError::Read {
        path: path.to_path_buf(),
        source,
    };
    let limit = algorithm.hex_len() as u64 + 1;
    let mut bytes = Vec::with_capacity(limit as usize);
    File::open(path)
        .and_then(|f| f.take(limit).read_to_end(&mut bytes))
        .map_err(read_err)?;
    String::from_utf8(bytes).map_err(|_| SidecarError::NotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Write `digest` as the whole content of a new sidecar at `path`.
/// An existing sidecar is never overwritten.
pub fn write_sidecar(path: &Path, digest: &HexDigest) -> Result<WriteOutcome, SidecarError> {
    let temp = temp_path(path);
    let written = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp)
        .and_then(|mut f| {
            f.write_all(digest.as_str().as_bytes())?;
            f.sync_all()
        });

    let outcome = written.and_then(|()| publish(&temp, path));
    discard_temp(&temp);
    outcome.map_err(|source| SidecarError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Move `temp` to `path` without clobbering. A hard link fails atomically if
/// `path` exists; filesystems without hard links fall back to check + rename.
fn publish(temp: &Path, path: &Path) -> io::Result<WriteOutcome> {
    match fs::hard_link(temp, path) {
        Ok(()) => Ok(WriteOutcome::Written),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(WriteOutcome::AlreadyExists),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "hard link unavailable, renaming");
            if exists(path) {
                return Ok(WriteOutcome::AlreadyExists);
            }
            fs::rename(temp, path)?;
            Ok(WriteOutcome::Written)
        }
    }
}

fn discard_temp(temp: &Path) {
    if let Err(e) = fs::remove_file(temp) {
        if e.kind() != io::ErrorKind::NotFound {
            tracing::warn!(path = %temp.display(), error = %e, "could not remove temp sidecar");
        }
    }
}
