//! Streaming file checksums.
//!
//! Files are read in fixed-size chunks and fed to an incremental hasher, so
//! memory use is bounded by the buffer size regardless of file size.

mod algorithm;
mod digest;
mod error;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use digest::{DigestParseError, HexDigest};
pub use error::HashError;

use md5::Md5;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Default read buffer size.
pub const DEFAULT_BUF_SIZE: usize = 64 * 1024;

fn stream<D: Digest>(mut reader: impl Read, buf: &mut [u8]) -> io::Result<Vec<u8>> {
    let mut hasher = D::new();
    loop {
        let n = match reader.read(buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().to_vec())
}

/// Hash everything `reader` yields, `buf_size` bytes at a time.
/// A `buf_size` of zero is treated as one.
pub fn hash_reader(reader: impl Read, algorithm: Algorithm, buf_size: usize) -> io::Result<HexDigest> {
    let mut buf = vec![0u8; buf_size.max(1)];
    let bytes = match algorithm {
        Algorithm::Md5 => stream::<Md5>(reader, &mut buf)?,
        Algorithm::Sha256 => stream::<Sha256>(reader, &mut buf)?,
    };
    Ok(HexDigest::from_bytes(algorithm, &bytes))
}

/// Compute the digest of the file at `path`.
pub fn hash_path(path: &Path, algorithm: Algorithm, buf_size: usize) -> Result<HexDigest, HashError> {
    let f = File::open(path).map_err(|source| HashError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    hash_reader(f, algorithm, buf_size).map_err(|source| HashError::Read {
        path: path.to_path_buf(),
        source,
    })
}
