//! simsh - a simulated shell over a persisted virtual file system
//!
//! Two layers: a virtual file system (an in-memory tree persisted to a
//! key-value snapshot store after every mutation) and a command interpreter
//! that parses single lines of input and dispatches to a fixed builtin set.
//! The interpreter knows nothing about rendering; callers consume the tagged
//! `CommandResult` it returns.

pub mod chat;
pub mod interpreter;
pub mod vfs;

pub use interpreter::{CommandResult, Interpreter, Outcome, CHAT_PROMPT};
pub use vfs::{FileStore, MemoryStore, Node, SnapshotStore, Vfs, VfsError, HOME_DIR};
