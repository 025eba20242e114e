//! Command Interpreter Module
//!
//! Parses a single line of input, dispatches to the builtin commands, and
//! formats results. Knows nothing about rendering or transports; callers
//! consume the `CommandResult` it returns.

pub mod types;
pub mod parse;
pub mod script;
pub mod builtins;
pub mod interpreter;

pub use interpreter::{Interpreter, CHAT_PROMPT};
pub use types::{CommandResult, Outcome};
