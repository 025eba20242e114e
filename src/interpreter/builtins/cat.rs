// src/interpreter/builtins/cat.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

pub struct CatBuiltin;

impl Builtin for CatBuiltin {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, vfs: &mut Vfs, args: &[&str]) -> CommandResult {
        let path = match args.first() {
            Some(path) => *path,
            None => return CommandResult::error("cat", "cat: missing file operand"),
        };

        match vfs.read_file(path) {
            Some(content) => CommandResult::output("cat", content),
            None if vfs.is_directory(path) => {
                CommandResult::error("cat", format!("cat: {}: Is a directory", path))
            }
            None => {
                CommandResult::error("cat", format!("cat: {}: No such file or directory", path))
            }
        }
    }
}
