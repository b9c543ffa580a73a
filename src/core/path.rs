//! Interpreter-side path resolution.
//!
//! Turns a path argument typed at the prompt into an absolute path string,
//! without consulting the filesystem. Existence checks happen later, against
//! the store.
//!
//! # Path Convention
//!
//! - Absolute paths (`/...`) are returned unchanged
//! - `~` expands to the home directory, `~/rest` to home + `/rest`
//! - Anything else is relative to the current working directory: `..` pops
//!   one segment (a no-op at the root, so a path never rises above `/`),
//!   `.` and empty segments are skipped

use crate::config::HOME_PATH;

/// Path separator character.
pub const SEPARATOR: char = '/';

/// The root path.
pub const ROOT: &str = "/";

/// Split a path into its non-empty segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Resolve a path argument against the current working directory.
pub fn resolve(cwd: &str, arg: &str) -> String {
    if arg.starts_with(SEPARATOR) {
        return arg.to_string();
    }
    if arg == "~" {
        return HOME_PATH.to_string();
    }
    if let Some(rest) = arg.strip_prefix("~/") {
        return format!("{HOME_PATH}/{rest}");
    }

    let mut parts: Vec<&str> = segments(cwd).collect();
    for part in arg.split(SEPARATOR) {
        match part {
            ".." => {
                parts.pop();
            }
            "." | "" => {}
            _ => parts.push(part),
        }
    }

    join(&parts)
}

/// The final component of a path, or `/` for the root.
pub fn last_segment(path: &str) -> &str {
    segments(path).last().unwrap_or(ROOT)
}

fn join(parts: &[&str]) -> String {
    format!("/{}", parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_paths_pass_through() {
        assert_eq!(resolve("/Users/guest", "/System"), "/System");
        assert_eq!(resolve("/", "/Users/guest/Documents"), "/Users/guest/Documents");
    }

    #[test]
    fn test_home_expansion() {
        assert_eq!(resolve("/System", "~"), "/Users/guest");
        assert_eq!(resolve("/System", "~/Documents"), "/Users/guest/Documents");
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(resolve("/Users/guest", "Documents"), "/Users/guest/Documents");
        assert_eq!(
            resolve("/Users/guest", "Documents/Projects"),
            "/Users/guest/Documents/Projects"
        );
        assert_eq!(resolve("/", "Users"), "/Users");
    }

    #[test]
    fn test_parent_traversal() {
        assert_eq!(resolve("/Users/guest", ".."), "/Users");
        assert_eq!(resolve("/Users", ".."), "/");
        // Never rises above the root.
        assert_eq!(resolve("/", ".."), "/");
        assert_eq!(resolve("/Users", "../../.."), "/");
        assert_eq!(resolve("/Users/guest", "../other"), "/Users/other");
    }

    #[test]
    fn test_dot_and_empty_segments_are_skipped() {
        assert_eq!(resolve("/Users/guest", "."), "/Users/guest");
        assert_eq!(resolve("/Users/guest", "./Documents"), "/Users/guest/Documents");
        assert_eq!(resolve("/Users/guest", "Documents//Projects"), "/Users/guest/Documents/Projects");
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/Users/guest"), "guest");
        assert_eq!(last_segment("/Users"), "Users");
        assert_eq!(last_segment("/"), "/");
    }
}
