// src/interpreter/builtins/ask.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

/// Signals the caller to hand subsequent lines to the chat transport. The
/// interpreter itself holds no chat state.
pub struct AskBuiltin;

impl Builtin for AskBuiltin {
    fn name(&self) -> &'static str {
        "ask"
    }

    fn execute(&self, _vfs: &mut Vfs, _args: &[&str]) -> CommandResult {
        CommandResult::enter_chat_mode("ask")
    }
}
