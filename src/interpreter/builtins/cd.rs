// src/interpreter/builtins/cd.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

pub struct CdBuiltin;

impl Builtin for CdBuiltin {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, vfs: &mut Vfs, args: &[&str]) -> CommandResult {
        let path = args.first().copied().unwrap_or("~");
        match vfs.cd(path) {
            Ok(()) => CommandResult::output("cd", ""),
            Err(err) => CommandResult::error("cd", format!("cd: {}: {}", err, path)),
        }
    }
}
