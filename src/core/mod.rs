//! Core business logic for the terminal application.
//!
//! This module provides:
//! - [`VirtualFileStore`] virtual filesystem management
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`TerminalSession`] interpreter session state
//! - [`path`] resolution of prompt-typed path arguments

mod commands;
pub mod error;
mod filesystem;
pub mod path;
mod session;

pub use commands::{Command, CommandResult, PathArg, execute_command};
pub use error::StoreError;
pub use filesystem::VirtualFileStore;
pub use session::TerminalSession;
