// src/interpreter/builtins/touch.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

pub struct TouchBuiltin;

impl Builtin for TouchBuiltin {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, vfs: &mut Vfs, args: &[&str]) -> CommandResult {
        let path = match args.first() {
            Some(path) => *path,
            None => return CommandResult::error("touch", "touch: missing file operand"),
        };

        // Existing entry (file or directory) is a silent no-op.
        if vfs.exists(path) {
            return CommandResult::output("touch", "");
        }

        match vfs.write_file(path, "") {
            Ok(()) => CommandResult::output("touch", ""),
            Err(err) => {
                CommandResult::error("touch", format!("touch: cannot touch '{}': {}", path, err))
            }
        }
    }
}
