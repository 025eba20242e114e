// src/interpreter/builtins/help.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::Vfs;

use super::Builtin;

pub const HELP_TEXT: &str = "Available commands:
  ls [path]           List directory contents
  ls -la [path]       List with details
  cd <path>           Change directory
  pwd                 Print working directory
  cat <file>          Display file contents
  mkdir <dir>         Create directory
  touch <file>        Create empty file
  echo <text> > file  Write text to file
  rm <path>           Remove file or directory
  clear               Clear terminal
  help                Show this help message
  ask                 Enter AI chat mode
  reset               Reset file system to default

Navigation:
  ~                   Home directory (/home/user)
  ..                  Parent directory
  .                   Current directory";

pub struct HelpBuiltin;

impl Builtin for HelpBuiltin {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _vfs: &mut Vfs, _args: &[&str]) -> CommandResult {
        CommandResult::output("help", HELP_TEXT)
    }
}
