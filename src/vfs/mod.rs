//! Virtual File System Module
//!
//! An in-memory tree of directories and files with lexical path resolution
//! and synchronous persistence to a key-value snapshot store.

pub mod types;
pub mod path;
pub mod store;
pub mod default_fs;
pub mod virtual_fs;

pub use types::*;
pub use store::{FileStore, MemoryStore, SnapshotStore, STORAGE_KEY};
pub use virtual_fs::{Vfs, HOME_DIR};
