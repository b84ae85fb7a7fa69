//! Hex hashes naming blobs in the object store

use crate::error::{ReifyError, Result};
use std::fmt;

/// A content hash as written in an index manifest.
///
/// The hash is opaque and kept exactly as written: any ASCII alphanumeric
/// string of at least two characters is accepted, since the object store
/// only needs the first two characters to find the shard directory. Hashes
/// are conventionally lowercase hex. The alphanumeric rule keeps every hash
/// a single path component.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ObjectHash(String);

impl ObjectHash {
    /// Minimum length: the shard prefix.
    pub const MIN_LEN: usize = 2;

    /// Validate a hash string
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() < Self::MIN_LEN || !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ReifyError::InvalidHash(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The shard directory name (first two hex characters)
    pub fn shard(&self) -> &str {
        &self.0[..Self::MIN_LEN]
    }

    /// Get the full hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ObjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectHash({})", self.0)
    }
}

impl fmt::Display for ObjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
