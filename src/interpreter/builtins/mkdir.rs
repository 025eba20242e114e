// src/interpreter/builtins/mkdir.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

pub struct MkdirBuiltin;

impl Builtin for MkdirBuiltin {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, vfs: &mut Vfs, args: &[&str]) -> CommandResult {
        let path = match args.first() {
            Some(path) => *path,
            None => return CommandResult::error("mkdir", "mkdir: missing operand"),
        };

        match vfs.mkdir(path) {
            Ok(()) => CommandResult::output("mkdir", ""),
            Err(err) => CommandResult::error(
                "mkdir",
                format!("mkdir: cannot create directory '{}': {}", path, err),
            ),
        }
    }
}
