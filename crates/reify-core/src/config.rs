//! Layered layout configuration
//!
//! Directory names are resolved with three layers of precedence (highest wins):
//! 1. Environment variables: `REIFY_INDEXES_DIR`, `REIFY_OBJECTS_DIR`, `REIFY_GENERATED_DIR`
//! 2. Project-local: `<root>/reify.toml`, table `[layout]`
//! 3. Built-in defaults: `indexes`, `objects`, `generated`

use crate::error::{ReifyError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-local config file
pub const CONFIG_FILE_NAME: &str = "reify.toml";

/// Directory names, relative to the root unless absolute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_indexes")]
    pub indexes: PathBuf,
    #[serde(default = "default_objects")]
    pub objects: PathBuf,
    #[serde(default = "default_generated")]
    pub generated: PathBuf,
}

fn default_indexes() -> PathBuf {
    PathBuf::from("indexes")
}
fn default_objects() -> PathBuf {
    PathBuf::from("objects")
}
fn default_generated() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            indexes: default_indexes(),
            objects: default_objects(),
            generated: default_generated(),
        }
    }
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    layout: LayoutConfig,
}

/// Absolute locations for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub root: PathBuf,
    pub indexes_dir: PathBuf,
    pub objects_dir: PathBuf,
    pub generated_dir: PathBuf,
}

impl LayoutConfig {
    /// Load config for `root`: defaults < `reify.toml` < env vars
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        let mut config = if path.is_file() {
            let content = fs::read_to_string(&path)?;
            Self::from_toml_str(&content).map_err(|e| {
                ReifyError::Config(format!("Failed to load {}: {}", path.display(), e))
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides_with(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse the `[layout]` table from a config file's contents
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.layout)
    }

    /// Apply environment overrides using the given lookup function
    pub fn apply_env_overrides_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = [
            ("REIFY_INDEXES_DIR", &mut self.indexes),
            ("REIFY_OBJECTS_DIR", &mut self.objects),
            ("REIFY_GENERATED_DIR", &mut self.generated),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *slot = PathBuf::from(value);
            }
        }
    }

    /// Resolve the configured directories against `root`
    pub fn workspace(&self, root: &Path) -> Workspace {
        Workspace {
            root: root.to_path_buf(),
            indexes_dir: root.join(&self.indexes),
            objects_dir: root.join(&self.objects),
            generated_dir: root.join(&self.generated),
        }
    }
}
