//! Copying manifest entries out of the object store

use crate::manifest::{AssetEntry, IndexManifest};
use crate::output::OutputTree;
use crate::store::ObjectStore;
use reify_core::{ObjectHash, ReifyError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What happened to a single manifest entry
#[derive(Debug)]
pub enum EntryOutcome<'a> {
    /// Blob copied to its destination
    Copied { entry: &'a AssetEntry, bytes: u64 },
    /// No blob at the computed store path
    MissingBlob {
        entry: &'a AssetEntry,
        blob: PathBuf,
    },
    /// Blob exists but the copy failed
    Failed {
        entry: &'a AssetEntry,
        error: io::Error,
    },
    /// Hash is not a usable blob name, or the logical path would land
    /// outside the output tree
    Rejected {
        entry: &'a AssetEntry,
        reason: ReifyError,
    },
}

impl EntryOutcome<'_> {
    /// Check if the entry was copied
    pub fn is_copied(&self) -> bool {
        matches!(self, EntryOutcome::Copied { .. })
    }
}

/// Tallies for one materialization run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub copied: usize,
    /// Bytes written by successful copies
    pub bytes: u64,
    pub missing: usize,
    pub failed: usize,
    pub rejected: usize,
    /// Entries skipped for lacking a `hash` field
    pub unhashed: usize,
    pub output_dir: PathBuf,
}

impl MaterializeReport {
    /// Check if every hashed entry was copied
    pub fn is_complete(&self) -> bool {
        self.missing == 0 && self.failed == 0 && self.rejected == 0
    }
}

/// Copies each entry of a manifest from the object store into an output tree
pub struct Materializer {
    objects_dir: PathBuf,
    store: Option<ObjectStore>,
    output: OutputTree,
}

impl Materializer {
    /// Create a materializer. The object store is not opened until the
    /// first entry needs it.
    pub fn new<P: AsRef<Path>>(objects_dir: P, output: OutputTree) -> Self {
        Self {
            objects_dir: objects_dir.as_ref().to_path_buf(),
            store: None,
            output,
        }
    }

    /// Process every entry, reporting each outcome to `observer`.
    ///
    /// Only an unusable object store ends the run early; per-entry problems
    /// are reported and tallied.
    pub fn run<'m, F>(
        &mut self,
        manifest: &'m IndexManifest,
        mut observer: F,
    ) -> Result<MaterializeReport>
    where
        F: FnMut(&EntryOutcome<'m>),
    {
        let mut report = MaterializeReport {
            unhashed: manifest.unhashed,
            output_dir: self.output.root().to_path_buf(),
            ..MaterializeReport::default()
        };

        for entry in &manifest.entries {
            let outcome = self.materialize_entry(entry)?;
            match &outcome {
                EntryOutcome::Copied { bytes, .. } => {
                    report.copied += 1;
                    report.bytes += bytes;
                }
                EntryOutcome::MissingBlob { blob, .. } => {
                    tracing::debug!(path = %entry.logical_path, blob = %blob.display(), "blob not found");
                    report.missing += 1;
                }
                EntryOutcome::Failed { error, .. } => {
                    tracing::debug!(path = %entry.logical_path, %error, "copy failed");
                    report.failed += 1;
                }
                EntryOutcome::Rejected { reason, .. } => {
                    tracing::debug!(path = %entry.logical_path, %reason, "entry rejected");
                    report.rejected += 1;
                }
            }
            observer(&outcome);
        }

        tracing::info!(
            version = %manifest.version,
            copied = report.copied,
            bytes = report.bytes,
            missing = report.missing,
            failed = report.failed,
            "materialization finished"
        );
        Ok(report)
    }

    fn materialize_entry<'m>(&mut self, entry: &'m AssetEntry) -> Result<EntryOutcome<'m>> {
        if self.store.is_none() {
            self.store = Some(ObjectStore::open(&self.objects_dir)?);
        }
        let store = self
            .store
            .as_ref()
            .ok_or_else(|| ReifyError::ObjectStoreInvalid(self.objects_dir.clone()))?;

        let hash = match ObjectHash::parse(&entry.hash) {
            Ok(hash) => hash,
            Err(reason) => return Ok(EntryOutcome::Rejected { entry, reason }),
        };
        let destination = match self.output.destination(&entry.logical_path) {
            Ok(dest) => dest,
            Err(reason @ ReifyError::UnsafeLogicalPath(_)) => {
                return Ok(EntryOutcome::Rejected { entry, reason })
            }
            Err(e) => return Err(e),
        };

        let Some(blob) = store.get(&hash) else {
            return Ok(EntryOutcome::MissingBlob {
                entry,
                blob: store.blob_path(&hash),
            });
        };

        tracing::debug!(%hash, dest = %destination.display(), "copying blob");
        match copy_blob(&blob, &destination) {
            Ok(bytes) => Ok(EntryOutcome::Copied { entry, bytes }),
            Err(error) => Ok(EntryOutcome::Failed { entry, error }),
        }
    }
}

fn copy_blob(blob: &Path, destination: &Path) -> io::Result<u64> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(blob, destination)
}
