//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results. Session effects
//! (directory changes, display resets) are returned on the result, not
//! applied here.

use crate::config::{DIRECTORY_GLYPH, EMPTY_DIRECTORY_LABEL, FILE_GLYPH, HELP_TEXT, HOME_PATH};
use crate::core::VirtualFileStore;
use crate::core::path;
use crate::models::Node;

use super::{Command, CommandResult, PathArg};

/// Execute a parsed command and return its output lines.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `store` - Virtual filesystem
/// * `cwd` - The session's current working directory (for resolving
///   relative paths, and the creation target of `mkdir`/`touch`)
pub fn execute_command(cmd: Command, store: &mut VirtualFileStore, cwd: &str) -> CommandResult {
    match cmd {
        Command::Help => {
            CommandResult::output(HELP_TEXT.lines().map(str::to_string).collect())
        }
        Command::Ls(target) => execute_ls(target, store, cwd),
        Command::Cd(target) => execute_cd(target, store, cwd),
        Command::Pwd => CommandResult::output(vec![cwd.to_string()]),
        Command::Cat(file) => execute_cat(file, store, cwd),
        Command::Mkdir(name) => execute_mkdir(name, store, cwd),
        Command::Touch(name) => execute_touch(name, store, cwd),
        Command::Rm(target) => execute_rm(target, store, cwd),
        Command::Echo(text) => CommandResult::output(vec![text]),
        Command::Clear => CommandResult::clear(),
        Command::Unknown(name) => CommandResult::error(format!("{name}: command not found")),
    }
}

/// Execute `ls` command.
fn execute_ls(target: Option<PathArg>, store: &VirtualFileStore, cwd: &str) -> CommandResult {
    let resolved = match &target {
        Some(p) => path::resolve(cwd, p.as_str()),
        None => cwd.to_string(),
    };

    match store.list(&resolved) {
        Some(children) if children.is_empty() => {
            CommandResult::output(vec![EMPTY_DIRECTORY_LABEL.to_string()])
        }
        Some(children) => CommandResult::output(children.iter().map(format_entry).collect()),
        None => CommandResult::error(format!("ls: {resolved}: No such file or directory")),
    }
}

/// Format one `ls` line: glyph plus name, directories suffixed with `/`.
fn format_entry(node: &Node) -> String {
    if node.is_directory() {
        format!("{DIRECTORY_GLYPH} {}/", node.name)
    } else {
        format!("{FILE_GLYPH} {}", node.name)
    }
}

/// Execute `cd` command.
fn execute_cd(target: Option<PathArg>, store: &VirtualFileStore, cwd: &str) -> CommandResult {
    let Some(target) = target else {
        return CommandResult::chdir(HOME_PATH);
    };

    let resolved = path::resolve(cwd, target.as_str());
    match store.resolve(&resolved) {
        Some(node) if node.is_directory() => CommandResult::chdir(resolved),
        _ => CommandResult::error(format!("cd: {target}: No such directory")),
    }
}

/// Execute `cat` command.
fn execute_cat(file: Option<PathArg>, store: &VirtualFileStore, cwd: &str) -> CommandResult {
    let Some(file) = file else {
        return CommandResult::error("cat: missing file operand");
    };

    let resolved = path::resolve(cwd, file.as_str());
    match store.read_file(&resolved) {
        Some(content) => {
            CommandResult::output(content.split('\n').map(str::to_string).collect())
        }
        None => CommandResult::error(format!("cat: {file}: No such file or directory")),
    }
}

/// Execute `mkdir` command. Creates directly under the current directory.
fn execute_mkdir(name: Option<String>, store: &mut VirtualFileStore, cwd: &str) -> CommandResult {
    let Some(name) = name else {
        return CommandResult::error("mkdir: missing operand");
    };

    match store.create_directory(cwd, &name) {
        Ok(()) => CommandResult::empty(),
        Err(_) => CommandResult::error(format!("mkdir: cannot create directory '{name}'")),
    }
}

/// Execute `touch` command. Creates directly under the current directory.
fn execute_touch(name: Option<String>, store: &mut VirtualFileStore, cwd: &str) -> CommandResult {
    let Some(name) = name else {
        return CommandResult::error("touch: missing file operand");
    };

    match store.create_file(cwd, &name, "") {
        Ok(()) => CommandResult::empty(),
        Err(_) => CommandResult::error(format!("touch: cannot create file '{name}'")),
    }
}

/// Execute `rm` command.
fn execute_rm(target: Option<PathArg>, store: &mut VirtualFileStore, cwd: &str) -> CommandResult {
    let Some(target) = target else {
        return CommandResult::error("rm: missing operand");
    };

    let resolved = path::resolve(cwd, target.as_str());
    match store.delete_node(&resolved) {
        Ok(()) => CommandResult::empty(),
        Err(_) => {
            CommandResult::error(format!("rm: cannot remove '{target}': No such file or directory"))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
