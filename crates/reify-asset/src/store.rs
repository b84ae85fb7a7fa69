//! Hash-sharded blob storage

use reify_core::{ObjectHash, ReifyError, Result};
use std::path::{Path, PathBuf};

/// Read-only view of a content-addressed object directory
///
/// Blobs live at `<root>/<first-2-hex>/<full-hash>`, with no extension.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    root: PathBuf,
}

impl ObjectStore {
    /// Open the store at `root`, which must be an existing directory
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ReifyError::ObjectStoreInvalid(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Get the storage path for a hash, whether or not the blob exists
    pub fn blob_path(&self, hash: &ObjectHash) -> PathBuf {
        self.root.join(hash.shard()).join(hash.as_str())
    }

    /// Get the path of a stored blob, if present
    pub fn get(&self, hash: &ObjectHash) -> Option<PathBuf> {
        let path = self.blob_path(hash);
        path.is_file().then_some(path)
    }
}
