//! Custom error types for the application.
//!
//! Store mutations report failures as values, never panics: every operation
//! on [`VirtualFileStore`](crate::core::VirtualFileStore) either succeeds or
//! returns a [`StoreError`] with the store left untouched. The interpreter
//! maps these to the fixed one-line messages each command prints.

use thiserror::Error;

/// Failure modes of store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The path (or an intermediate segment of it) does not resolve.
    #[error("{0}: no such file or directory")]
    NotFound(String),

    /// The path resolves to a file where a directory is required.
    #[error("{0}: not a directory")]
    NotADirectory(String),

    /// The path resolves to a directory where a file is required.
    #[error("{0}: not a file")]
    NotAFile(String),

    /// The destination directory already has a child with this name.
    #[error("{0}: name already exists")]
    NameTaken(String),

    /// Empty name, or a name containing the path separator.
    #[error("invalid node name: {0:?}")]
    InvalidName(String),

    /// The root directory cannot be deleted, renamed, or replaced.
    #[error("the root directory cannot be removed or replaced")]
    RootProtected,
}
