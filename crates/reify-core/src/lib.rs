//! Reify Core - Foundational types for reify
//!
//! This crate provides the types that the other reify crates depend on:
//! - `ObjectHash` - Validated hex hash naming a blob in the object store
//! - `LayoutConfig`, `Workspace` - Where indexes, objects and output live
//! - Error types and Result alias

mod config;
mod error;
mod hash;

pub use config::{LayoutConfig, Workspace, CONFIG_FILE_NAME};
pub use error::{ReifyError, Result};
pub use hash::ObjectHash;
