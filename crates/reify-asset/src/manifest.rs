//! Index manifest schema

use reify_core::{ReifyError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One asset: where it goes and which blob holds its bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Destination-relative path, `/`-separated
    pub logical_path: String,
    /// The `hash` value as text; validated per entry when materialized
    pub hash: String,
}

/// A parsed index manifest for one version
#[derive(Debug, Clone)]
pub struct IndexManifest {
    pub version: String,
    /// Hashed entries, sorted by logical path
    pub entries: Vec<AssetEntry>,
    /// Entries that had no `hash` field
    pub unhashed: usize,
}

/// On-disk document shape. Unknown keys are ignored at every level.
#[derive(Debug, Deserialize)]
struct ManifestDocument {
    #[serde(default)]
    objects: Option<BTreeMap<String, EntryDocument>>,
}

#[derive(Debug, Deserialize)]
struct EntryDocument {
    #[serde(default)]
    hash: Option<Value>,
}

/// Render a `hash` value as text. Scalars become their plain text, compound
/// values their JSON text (which never names a blob). `null` counts as absent.
fn hash_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}

impl IndexManifest {
    /// Load and validate a manifest file
    pub fn load<P: AsRef<Path>>(path: P, version: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content, version, path)
    }

    /// Parse manifest JSON. `source` only labels errors.
    pub fn from_json_str(content: &str, version: &str, source: &Path) -> Result<Self> {
        let doc: ManifestDocument =
            serde_json::from_str(content).map_err(|e| ReifyError::ManifestParse {
                path: source.to_path_buf(),
                reason: e.to_string(),
            })?;

        let objects = doc
            .objects
            .ok_or_else(|| ReifyError::ManifestMissingObjects(source.to_path_buf()))?;

        let mut entries = Vec::with_capacity(objects.len());
        let mut unhashed = 0;
        for (logical_path, entry) in objects {
            let Some(hash) = entry.hash.and_then(hash_text) else {
                unhashed += 1;
                continue;
            };
            entries.push(AssetEntry { logical_path, hash });
        }

        Ok(Self {
            version: version.to_string(),
            entries,
            unhashed,
        })
    }

    /// Total number of entries in the `objects` table
    pub fn len(&self) -> usize {
        self.entries.len() + self.unhashed
    }

    /// Check if the manifest lists no entries at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
