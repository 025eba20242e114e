// src/interpreter/builtins/clear.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

pub struct ClearBuiltin;

impl Builtin for ClearBuiltin {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _vfs: &mut Vfs, _args: &[&str]) -> CommandResult {
        CommandResult::clear_screen("clear")
    }
}
