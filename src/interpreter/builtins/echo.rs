// src/interpreter/builtins/echo.rs
use crate::interpreter::parse::strip_quotes;
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

/// Plain echo, no redirection. The redirected form (`echo text > file`) is
/// recognized before dispatch and never reaches this builtin.
pub struct EchoBuiltin;

impl Builtin for EchoBuiltin {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, _vfs: &mut Vfs, args: &[&str]) -> CommandResult {
        let joined = args.join(" ");
        CommandResult::output("echo", strip_quotes(&joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_joins_with_single_spaces() {
        let mut vfs = Vfs::in_memory();
        let result = EchoBuiltin.execute(&mut vfs, &["hello", "world"]);
        assert_eq!(result.output_text(), "hello world");
    }

    #[test]
    fn test_echo_strips_surrounding_quotes() {
        let mut vfs = Vfs::in_memory();
        let result = EchoBuiltin.execute(&mut vfs, &["\"hello", "world\""]);
        assert_eq!(result.output_text(), "hello world");
    }

    #[test]
    fn test_echo_no_args() {
        let mut vfs = Vfs::in_memory();
        let result = EchoBuiltin.execute(&mut vfs, &[]);
        assert_eq!(result.output_text(), "");
    }
}
