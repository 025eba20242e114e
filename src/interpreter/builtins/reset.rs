// src/interpreter/builtins/reset.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

pub struct ResetBuiltin;

impl Builtin for ResetBuiltin {
    fn name(&self) -> &'static str {
        "reset"
    }

    fn execute(&self, vfs: &mut Vfs, _args: &[&str]) -> CommandResult {
        vfs.reset();
        CommandResult::output("reset", "File system reset to default.")
    }
}
