// src/interpreter/builtins/ls.rs
use crate::interpreter::types::CommandResult;
use crate::vfs::{DirEntry, NodeKind, Vfs};

use super::Builtin;

pub struct LsBuiltin;

impl Builtin for LsBuiltin {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, vfs: &mut Vfs, args: &[&str]) -> CommandResult {
        let detailed = args.iter().any(|a| matches!(*a, "-l" | "-la" | "-a"));
        let path = args.iter().find(|a| !a.starts_with('-')).copied().unwrap_or(".");

        let entries = match vfs.list_dir(path) {
            Some(entries) => entries,
            None => {
                return CommandResult::error(
                    "ls",
                    format!("ls: cannot access '{}': No such file or directory", path),
                );
            }
        };

        if entries.is_empty() {
            return CommandResult::output("ls", "");
        }

        let output = if detailed {
            entries.iter().map(detail_line).collect::<Vec<_>>().join("\n")
        } else {
            entries.iter().map(short_name).collect::<Vec<_>>().join("  ")
        };
        CommandResult::output("ls", output)
    }
}

/// One long-listing line. The permission bits, sizes, and date are cosmetic
/// fixed text, not real metadata.
fn detail_line(entry: &DirEntry) -> String {
    match entry.kind {
        NodeKind::Dir => format!("drwxr-xr-x  1 user user 4096 Jan 11 12:00 {}/", entry.name),
        NodeKind::File => format!("-rw-r--r--  1 user user  512 Jan 11 12:00 {}", entry.name),
    }
}

fn short_name(entry: &DirEntry) -> String {
    match entry.kind {
        NodeKind::Dir => format!("{}/", entry.name),
        NodeKind::File => entry.name.clone(),
    }
}
