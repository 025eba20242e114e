//! Script execution.
//!
//! A deliberately minimal interpreter-within-the-interpreter: a script is a
//! file whose `echo` lines are replayed as output, in file order. Nothing
//! else executes — no variables, no control flow, no recursion back into the
//! command interpreter.

use crate::vfs::Vfs;

use super::types::CommandResult;

/// Run the file at `command` as a script. `command` is the token as typed
/// (`./services.sh` or `services.sh`); a single leading `./` is stripped
/// before resolution, but error messages echo the token back unchanged.
pub fn run_script(vfs: &Vfs, command: &str) -> CommandResult {
    let clean = command.strip_prefix("./").unwrap_or(command);

    let content = match vfs.read_file(clean) {
        Some(content) => content,
        None if vfs.is_directory(clean) => {
            return CommandResult::error(command, format!("bash: {}: Is a directory", command));
        }
        None => {
            return CommandResult::error(
                command,
                format!("bash: {}: No such file or directory", command),
            );
        }
    };

    let outputs: Vec<String> = content.lines().filter_map(echo_payload).collect();
    CommandResult::output(command, outputs.join("\n"))
}

/// Extract the payload of an `echo` line, or `None` for any other line.
///
/// Recognized forms: `echo "…"` and `echo '…'` take the text between the
/// first and *last* quote; a quoted form with no closing quote falls through
/// to the bare form, opening quote included; bare `echo` emits an empty
/// line.
fn echo_payload(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed == "echo" {
        return Some(String::new());
    }

    let rest = trimmed.strip_prefix("echo")?;
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let rest = rest.trim_start();

    for quote in ['"', '\''] {
        if let Some(inner) = rest.strip_prefix(quote) {
            if let Some(end) = inner.rfind(quote) {
                return Some(inner[..end].to_string());
            }
        }
    }
    Some(rest.to_string())
}
