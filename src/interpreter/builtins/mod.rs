//! Builtin Commands
//!
//! One module per builtin. Each builtin receives the session VFS and its
//! positional arguments and produces a `CommandResult`; error text follows
//! the `<command>: <message>` convention.

pub mod registry;

pub mod ls;
pub mod cd;
pub mod pwd;
pub mod cat;
pub mod mkdir;
pub mod touch;
pub mod rm;
pub mod echo;
pub mod clear;
pub mod help;
pub mod ask;
pub mod reset;

use crate::vfs::Vfs;

use super::types::CommandResult;

/// A builtin shell command.
pub trait Builtin: Send + Sync {
    /// The lowercase name the command dispatches under.
    fn name(&self) -> &'static str;

    fn execute(&self, vfs: &mut Vfs, args: &[&str]) -> CommandResult;
}

pub use registry::{register_builtins, BuiltinRegistry};
