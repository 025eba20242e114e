//! Snapshot Stores
//!
//! The persistence boundary for the file system snapshot: a string key-value
//! store. The snapshot always lives under one fixed key.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// The fixed key the `{fs, cwd}` snapshot is stored under.
pub const STORAGE_KEY: &str = "raikhen-fs";

/// Abstract key-value store the VFS persists its snapshot into.
///
/// Writes are best-effort: a backend that cannot persist simply drops the
/// value, and the VFS keeps operating on its in-memory state.
pub trait SnapshotStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store. Used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }
}

/// Store backed by a single JSON file holding the key-value map.
///
/// Reads happen once at construction; every `set` rewrites the file. I/O
/// failures are swallowed: a missing or unreadable file behaves like an
/// empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: HashMap<String, String>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, data }
    }
}

impl SnapshotStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
        if let Ok(text) = serde_json::to_string(&self.data) {
            let _ = fs::write(&self.path, text);
        }
    }
}
