// src/interpreter/builtins/rm.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

pub struct RmBuiltin;

impl Builtin for RmBuiltin {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, vfs: &mut Vfs, args: &[&str]) -> CommandResult {
        let path = match args.first() {
            Some(path) => *path,
            None => return CommandResult::error("rm", "rm: missing operand"),
        };

        match vfs.rm(path) {
            Ok(()) => CommandResult::output("rm", ""),
            Err(err) => {
                CommandResult::error("rm", format!("rm: cannot remove '{}': {}", path, err))
            }
        }
    }
}
