//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Node`], [`NodeKind`] - virtual filesystem tree representation
//! - [`SeedManifest`] - initial tree configuration
//! - [`ExecResult`], [`TranscriptEntry`] - terminal output types

mod manifest;
mod node;
mod terminal;

pub use manifest::{SeedDirectory, SeedFile, SeedManifest};
pub use node::{Node, NodeKind};
pub use terminal::{ExecResult, TranscriptEntry};
