//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Banner displayed when a terminal session opens.
pub const WELCOME_TEXT: &str = include_str!("../assets/text/welcome.txt");

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Initial filesystem tree, as a JSON seed manifest.
pub const SEED_MANIFEST: &str = include_str!("../assets/seed.json");

// =============================================================================
// Session Identity
// =============================================================================

/// User name shown in the prompt.
pub const USER: &str = "guest";

/// Host name shown in the prompt.
pub const HOST: &str = "desktop";

/// Home directory every session starts in; the target of `~` and bare `cd`.
pub const HOME_PATH: &str = "/Users/guest";

// =============================================================================
// Listing Display
// =============================================================================

/// Glyph prefixed to directory entries in `ls` output.
pub const DIRECTORY_GLYPH: &str = "\u{1F4C1}";

/// Glyph prefixed to file entries in `ls` output.
pub const FILE_GLYPH: &str = "\u{1F4C4}";

/// Line printed when `ls` targets a directory with no children.
pub const EMPTY_DIRECTORY_LABEL: &str = "(empty directory)";
