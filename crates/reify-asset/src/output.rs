//! Per-version output directory

use reify_core::{ReifyError, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// The `generated/<version>` directory that receives materialized files
#[derive(Debug, Clone)]
pub struct OutputTree {
    root: PathBuf,
}

impl OutputTree {
    /// Remove any previous output for `version`, then recreate the directory.
    ///
    /// A missing previous tree is not an error. Any other I/O failure is.
    pub fn prepare<P: AsRef<Path>>(generated_dir: P, version: &str) -> Result<Self> {
        let root = generated_dir.as_ref().join(version);

        match fs::remove_dir_all(&root) {
            Ok(()) => tracing::info!(dir = %root.display(), "removed previous output"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        fs::create_dir_all(&root)?;

        Ok(Self { root })
    }

    /// Map a `/`-separated logical path to its destination under the tree.
    ///
    /// Absolute paths and `..` components are rejected so that no entry can
    /// write outside the tree.
    pub fn destination(&self, logical_path: &str) -> Result<PathBuf> {
        let mut dest = self.root.clone();
        let mut pushed = false;
        for part in logical_path.split('/') {
            if part.is_empty() || part == "." {
                continue;
            }
            let mut components = Path::new(part).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(name)), None) => {
                    dest.push(name);
                    pushed = true;
                }
                _ => return Err(ReifyError::UnsafeLogicalPath(logical_path.to_string())),
            }
        }
        if !pushed || logical_path.starts_with('/') {
            return Err(ReifyError::UnsafeLogicalPath(logical_path.to_string()));
        }
        Ok(dest)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
