//! Hex digest value with its shape invariants.

use super::Algorithm;
use std::fmt;

/// Lowercase hex digest of a file's content.
///
/// Always exactly `algorithm.hex_len()` characters from `[0-9a-f]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexDigest {
    algorithm: Algorithm,
    hex: String,
}

/// Why a stored string is not a well-formed digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigestParseError {
    #[error("expected {expected} hex characters, found {found}")]
    Length { expected: usize, found: usize },
    #[error("invalid character {0:?} (expected lowercase hex)")]
    Character(char),
}

impl HexDigest {
    pub(crate) fn from_bytes(algorithm: Algorithm, bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.output_len());
        HexDigest {
            algorithm,
            hex: hex::encode(bytes),
        }
    }

    /// Validate `s` as a digest for `algorithm`. No trimming is applied, so a
    /// trailing newline is a length error.
    pub fn parse(algorithm: Algorithm, s: &str) -> Result<Self, DigestParseError> {
        if let Some(c) = s
            .chars()
            .find(|c| !matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(DigestParseError::Character(c));
        }
        if s.len() != algorithm.hex_len() {
            return Err(DigestParseError::Length {
                expected: algorithm.hex_len(),
                found: s.len(),
            });
        }
        Ok(HexDigest {
            algorithm,
            hex: s.to_string(),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Exact string comparison against stored sidecar content.
    pub fn matches(&self, stored: &str) -> bool {
        self.hex == stored
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
