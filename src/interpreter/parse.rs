//! Line parsing helpers.
//!
//! Small explicit scanners instead of regexes. The parsing rules they encode:
//!
//! - An `echo ... > file` line splits at the *last* unescaped `>`; the text
//!   before it is written verbatim (a `\>` is not a split point and is kept
//!   as typed).
//! - Quote stripping removes exactly one layer of matching surrounding
//!   quote characters (`"..."` or `'...'`); mismatched quotes are left alone.

/// Split a line into whitespace-separated tokens.
pub fn split_tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Recognize `echo <text> > <file>`. Returns the raw text (quotes intact,
/// trimmed) and the destination path, or `None` if the line is not an echo
/// redirection.
pub fn parse_echo_redirect(line: &str) -> Option<(&str, &str)> {
    let rest = strip_echo_prefix(line)?;
    let split = last_unescaped_gt(rest)?;

    let text = rest[..split].trim();
    let file = rest[split + 1..].trim();
    if text.is_empty() || file.is_empty() {
        return None;
    }
    Some((text, file))
}

/// The payload after `echo` + whitespace, or `None` if the line is not an
/// echo invocation with arguments.
fn strip_echo_prefix(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("echo")?;
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    Some(rest.trim_start())
}

/// Byte index of the last `>` not preceded by a backslash.
fn last_unescaped_gt(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (0..bytes.len())
        .rev()
        .find(|&i| bytes[i] == b'>' && (i == 0 || bytes[i - 1] != b'\\'))
}

/// Strip one layer of matching surrounding quote characters.
pub fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}
