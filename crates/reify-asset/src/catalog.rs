//! Discovery of index manifests

use reify_core::{ReifyError, Result, Workspace};
use std::fs;
use std::path::PathBuf;

/// Suffix that marks a file in the indexes directory as a manifest
const MANIFEST_EXTENSION: &str = ".json";

/// A manifest file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    /// Version name: file name without the `.json` suffix
    pub name: String,
    pub path: PathBuf,
}

/// The manifests available in an indexes directory, sorted by name
#[derive(Debug, Default)]
pub struct ManifestCatalog {
    manifests: Vec<ManifestFile>,
}

impl ManifestCatalog {
    /// List the regular `.json` files directly inside the workspace's
    /// indexes directory.
    ///
    /// A missing (or non-directory) indexes directory is an error; an empty
    /// directory yields an empty catalog.
    pub fn discover(workspace: &Workspace) -> Result<Self> {
        let dir = workspace.indexes_dir.as_path();
        if !dir.is_dir() {
            return Err(ReifyError::IndexesDirMissing {
                root: workspace.root.clone(),
                dir: dir.to_path_buf(),
            });
        }

        let mut manifests = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name
                .to_str()
                .and_then(|n| n.strip_suffix(MANIFEST_EXTENSION))
            else {
                continue;
            };
            manifests.push(ManifestFile {
                name: name.to_string(),
                path: entry.path(),
            });
        }
        manifests.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(dir = %dir.display(), count = manifests.len(), "discovered manifests");
        Ok(Self { manifests })
    }

    /// Find the manifest named by user input.
    ///
    /// Matching is case-insensitive; an exact-case match wins when several
    /// names differ only by case.
    pub fn select(&self, input: &str) -> Option<&ManifestFile> {
        self.manifests
            .iter()
            .find(|m| m.name == input)
            .or_else(|| {
                self.manifests
                    .iter()
                    .find(|m| m.name.to_lowercase() == input.to_lowercase())
            })
    }

    /// Get all manifest names
    pub fn names(&self) -> Vec<&str> {
        self.manifests.iter().map(|m| m.name.as_str()).collect()
    }

    /// Get the number of manifests
    pub fn len(&self) -> usize {
        self.manifests.len()
    }

    /// Check if no manifests were found
    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }
}
