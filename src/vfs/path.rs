//! Lexical path resolution.
//!
//! Paths are resolved purely as strings, with no tree lookups: `~` expands to
//! the home directory, relative paths are joined onto a base, and `.`/`..`
//! segments are normalized. `..` above the root is clamped rather than an
//! error.

use super::virtual_fs::HOME_DIR;

/// Resolve a raw path against a base (the caller's cwd) into an absolute,
/// normalized path. An empty path resolves to the base itself.
pub fn resolve(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }

    let joined = if path.starts_with('/') {
        path.to_string()
    } else if path == "~" {
        HOME_DIR.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{}", HOME_DIR, rest)
    } else {
        format!("{}/{}", base, path)
    };

    normalize(&joined)
}

/// Collapse `.` and `..` segments. Popping past the root is a no-op.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Split an absolute, normalized path into its parent path and leaf name.
/// Returns `None` for the root, which has no parent entry.
pub fn split_parent(resolved: &str) -> Option<(&str, &str)> {
    if resolved == "/" {
        return None;
    }
    let pos = resolved.rfind('/')?;
    let parent = if pos == 0 { "/" } else { &resolved[..pos] };
    Some((parent, &resolved[pos + 1..]))
}
