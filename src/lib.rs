//! An in-memory desktop environment core: a virtual filesystem tree and the
//! terminal command interpreter that drives it.
//!
//! Everything here is client-side view state — "files" and "directories"
//! are plain tree nodes with no durability and no operating-system
//! interaction. The [`VirtualFileStore`] owns the canonical tree and hands
//! out consistent snapshots; a [`TerminalSession`] interprets a small fixed
//! command language against it and keeps the per-terminal state (working
//! directory, recall history, transcript) that the rendering layer displays.
//!
//! # Example
//!
//! ```
//! use deskshell::{TerminalSession, VirtualFileStore};
//!
//! let mut store = VirtualFileStore::seeded();
//! let mut session = TerminalSession::new();
//!
//! let result = session.execute(&mut store, "mkdir projects");
//! assert!(!result.is_error);
//!
//! let result = session.execute(&mut store, "ls");
//! assert!(result.output.iter().any(|line| line.ends_with("projects/")));
//! ```

pub mod config;
pub mod core;
pub mod models;

pub use crate::core::{
    Command, CommandResult, PathArg, StoreError, TerminalSession, VirtualFileStore,
};
pub use crate::models::{ExecResult, Node, NodeKind, SeedManifest, TranscriptEntry};
