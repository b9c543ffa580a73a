//! Command execution result type.

/// Result of executing a command.
///
/// Commands produce output lines and can request two session effects: a
/// working-directory change (`cd`) and a display reset (`clear`). Effects
/// are returned here rather than applied directly, so execution stays a pure
/// function of command, store, and cwd.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display.
    pub output: Vec<String>,
    /// Whether the output represents a failure.
    pub is_error: bool,
    /// New working directory to switch to, if any.
    pub new_cwd: Option<String>,
    /// Whether the displayed output buffer should be reset.
    pub clear_screen: bool,
}

impl CommandResult {
    /// Create a successful result with just output.
    pub fn output(lines: Vec<String>) -> Self {
        Self {
            output: lines,
            is_error: false,
            new_cwd: None,
            clear_screen: false,
        }
    }

    /// Create a failed result with a single message line.
    pub fn error(line: impl Into<String>) -> Self {
        Self {
            output: vec![line.into()],
            is_error: true,
            new_cwd: None,
            clear_screen: false,
        }
    }

    /// Create an empty result (no output, no effects).
    pub fn empty() -> Self {
        Self::output(Vec::new())
    }

    /// Create a result that changes the working directory.
    pub fn chdir(path: impl Into<String>) -> Self {
        Self {
            output: Vec::new(),
            is_error: false,
            new_cwd: Some(path.into()),
            clear_screen: false,
        }
    }

    /// Create a result that resets the displayed output buffer.
    pub fn clear() -> Self {
        Self {
            output: Vec::new(),
            is_error: false,
            new_cwd: None,
            clear_screen: true,
        }
    }
}
