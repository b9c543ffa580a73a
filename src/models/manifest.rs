//! Seed manifest describing the initial filesystem tree.
//!
//! The seed is configuration, not protocol: the store can be built from any
//! manifest, and the binary accepts a replacement file at startup. Paths are
//! relative to the root with no leading or trailing slashes (for example
//! `Users/guest/Documents`); missing parent directories are created on
//! insertion, in manifest order.

use serde::{Deserialize, Serialize};

/// Root manifest structure describing an initial tree.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SeedManifest {
    /// Directories to create (even if they end up empty).
    #[serde(default)]
    pub directories: Vec<SeedDirectory>,
    /// Files to create, with their full content.
    #[serde(default)]
    pub files: Vec<SeedFile>,
}

/// A directory entry in the seed manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SeedDirectory {
    /// Directory path relative to the root.
    pub path: String,
}

/// A file entry in the seed manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SeedFile {
    /// File path relative to the root.
    pub path: String,
    /// Full file content; empty when omitted.
    #[serde(default)]
    pub content: String,
}
