//! Terminal-related data types for output rendering.

/// Result of executing one raw input line.
///
/// This is what the rendering layer consumes after each submission: the
/// trimmed command to echo next to the prompt, the output lines to append,
/// and whether they should be styled as an error. `clear_screen` is the one
/// display-state effect a command can request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecResult {
    /// The trimmed input line, echoed after the prompt. Empty for a blank
    /// submission.
    pub echoed_command: String,
    /// Output lines produced by the command.
    pub output: Vec<String>,
    /// Whether the output lines represent a failure.
    pub is_error: bool,
    /// Whether the displayed output buffer was reset.
    pub clear_screen: bool,
}

/// One rendered entry of the session transcript: an echoed command together
/// with the lines it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// The command as typed (trimmed). Empty for banner and blank entries.
    pub command: String,
    /// Output lines below the echoed command.
    pub output: Vec<String>,
    /// Whether the lines should be styled as an error.
    pub is_error: bool,
}

impl TranscriptEntry {
    /// Create a transcript entry for an executed command.
    pub fn new(command: impl Into<String>, output: Vec<String>, is_error: bool) -> Self {
        Self {
            command: command.into(),
            output,
            is_error,
        }
    }

    /// A blank entry: a re-printed prompt with no command and no output.
    pub fn blank() -> Self {
        Self::new("", Vec::new(), false)
    }
}
