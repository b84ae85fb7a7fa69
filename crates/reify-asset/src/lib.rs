//! Reify Asset - Asset index resolution
//!
//! This crate turns a content-addressed asset index into a directory tree of
//! real files: manifest discovery and parsing, hash-sharded blob lookup, and
//! copying each blob to the path named by its logical asset name.

mod catalog;
mod manifest;
mod materialize;
mod output;
mod store;

pub use catalog::{ManifestCatalog, ManifestFile};
pub use manifest::{AssetEntry, IndexManifest};
pub use materialize::{EntryOutcome, MaterializeReport, Materializer};
pub use output::OutputTree;
pub use store::ObjectStore;
