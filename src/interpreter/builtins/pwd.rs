// src/interpreter/builtins/pwd.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

pub struct PwdBuiltin;

impl Builtin for PwdBuiltin {
    fn name(&self) -> &'static str {
        "pwd"
    }

    // Prints the absolute cwd, not the ~-substituted display form.
    fn execute(&self, vfs: &mut Vfs, _args: &[&str]) -> CommandResult {
        CommandResult::output("pwd", vfs.pwd())
    }
}
