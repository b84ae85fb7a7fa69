//! Error types for reify

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for reify operations
#[derive(Debug, Error)]
pub enum ReifyError {
    #[error("No \"indexes\" directory was found in the running directory {} (looked for {})", .root.display(), .dir.display())]
    IndexesDirMissing { root: PathBuf, dir: PathBuf },

    #[error("Invalid objects location, does it exist? ({})", .0.display())]
    ObjectStoreInvalid(PathBuf),

    #[error("Manifest {} has no \"objects\" key", .0.display())]
    ManifestMissingObjects(PathBuf),

    #[error("Failed to parse manifest {}: {reason}", .path.display())]
    ManifestParse { path: PathBuf, reason: String },

    #[error("Invalid hash {0:?}")]
    InvalidHash(String),

    #[error("Refusing to write outside the output directory: {0}")]
    UnsafeLogicalPath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for reify operations
pub type Result<T> = std::result::Result<T, ReifyError>;

impl From<toml::de::Error> for ReifyError {
    fn from(err: toml::de::Error) -> Self {
        ReifyError::TomlParseError(err.to_string())
    }
}
