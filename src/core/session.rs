//! Terminal session state and the interpreter entry point.
//!
//! A [`TerminalSession`] owns everything that belongs to one open terminal:
//! the current working directory, the recall history driven by the up/down
//! arrows, and the display transcript. It does NOT own the filesystem — the
//! store is owned by the application root and passed in on every
//! [`execute`](TerminalSession::execute) call, so a file-manager view and a
//! terminal can share one tree.

use tracing::debug;

use crate::config::{HOME_PATH, HOST, USER, WELCOME_TEXT};
use crate::core::commands::{Command, CommandResult, execute_command};
use crate::core::path;
use crate::core::VirtualFileStore;
use crate::models::{ExecResult, TranscriptEntry};

/// One interpreter session.
#[derive(Clone, Debug)]
pub struct TerminalSession {
    /// Current working directory. Always an absolute path string; the
    /// directory it denotes may stop existing if it is deleted out from
    /// under the session, in which case relative operations keep failing
    /// with ordinary not-found errors until the next successful `cd`.
    cwd: String,
    /// Raw trimmed input lines, oldest first. Grows without bound.
    recall: Vec<String>,
    /// Cursor into `recall` while navigating with up/down; `None` when
    /// editing a fresh line.
    recall_index: Option<usize>,
    /// Display transcript consumed by the rendering layer.
    transcript: Vec<TranscriptEntry>,
}

impl TerminalSession {
    /// Create a session at the home directory, with the welcome banner as
    /// the first transcript entry.
    pub fn new() -> Self {
        Self {
            cwd: HOME_PATH.to_string(),
            recall: Vec::new(),
            recall_index: None,
            transcript: vec![TranscriptEntry::new(
                "",
                WELCOME_TEXT.lines().map(str::to_string).collect(),
                false,
            )],
        }
    }

    /// The session's current working directory.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Executed input lines, oldest first.
    pub fn recall(&self) -> &[String] {
        &self.recall
    }

    /// The display transcript, oldest entry first.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// The prompt string for the current directory.
    ///
    /// Format: `{user}@{host}:~/{segment}$` where `segment` is the final
    /// path component of the cwd, or `/` at the root (yes, that renders as
    /// `~//$` — the root marker is substituted into the same template).
    pub fn prompt(&self) -> String {
        format!("{USER}@{HOST}:~/{}$", path::last_segment(&self.cwd))
    }

    /// Execute one raw input line against the store.
    ///
    /// A blank line re-prints the prompt: it lands in the transcript but
    /// not in recall. Everything else — including failures and `clear` — is
    /// appended to recall and resets the recall cursor.
    pub fn execute(&mut self, store: &mut VirtualFileStore, raw: &str) -> ExecResult {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.transcript.push(TranscriptEntry::blank());
            return ExecResult {
                echoed_command: String::new(),
                output: Vec::new(),
                is_error: false,
                clear_screen: false,
            };
        }

        let mut words = trimmed.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<String> = words.map(str::to_string).collect();

        debug!(command = name, cwd = %self.cwd, "executing");
        let CommandResult {
            output,
            is_error,
            new_cwd,
            clear_screen,
        } = execute_command(Command::parse(name, &args), store, &self.cwd);

        if let Some(next) = new_cwd {
            self.cwd = next;
        }
        if clear_screen {
            self.transcript.clear();
        } else {
            self.transcript
                .push(TranscriptEntry::new(trimmed, output.clone(), is_error));
        }
        self.recall.push(trimmed.to_string());
        self.recall_index = None;

        ExecResult {
            echoed_command: trimmed.to_string(),
            output,
            is_error,
            clear_screen,
        }
    }

    /// Step back through recall (ArrowUp).
    ///
    /// The first press jumps to the most recent entry; further presses walk
    /// toward the oldest and clamp there. `None` when recall is empty.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.recall.is_empty() {
            return None;
        }
        let index = match self.recall_index {
            None => self.recall.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.recall_index = Some(index);
        self.recall.get(index).map(String::as_str)
    }

    /// Step forward through recall (ArrowDown).
    ///
    /// Walking past the newest entry leaves recall mode and returns `None`,
    /// which the input line renders as an empty buffer.
    pub fn recall_next(&mut self) -> Option<&str> {
        let index = self.recall_index?;
        let next = index + 1;
        if next >= self.recall.len() {
            self.recall_index = None;
            return None;
        }
        self.recall_index = Some(next);
        self.recall.get(next).map(String::as_str)
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}
