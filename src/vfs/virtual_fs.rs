//! Virtual File System
//!
//! The per-session file system: an ownership tree of directories and files
//! plus the current working directory, persisted as one `{fs, cwd}` snapshot
//! after every mutation.

use serde::{Deserialize, Serialize};

use super::default_fs::default_tree;
use super::path;
use super::store::{SnapshotStore, STORAGE_KEY};
use super::types::{DirEntry, Node, VfsError};

/// The fixed home directory the session starts in.
pub const HOME_DIR: &str = "/home/user";

/// The persisted snapshot record.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    fs: Node,
    #[serde(default = "default_cwd")]
    cwd: String,
}

fn default_cwd() -> String {
    HOME_DIR.to_string()
}

/// A virtual file system session.
///
/// Holds the tree, the cwd, and the store it persists into. Construction
/// loads the stored snapshot, falling back to the default tree when the
/// snapshot is absent or corrupt. Every mutating operation persists the full
/// snapshot synchronously before returning.
pub struct Vfs {
    root: Node,
    cwd: String,
    store: Box<dyn SnapshotStore>,
}

impl Vfs {
    /// Load a session from the given store, or start from the default tree.
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        let snapshot = store
            .get(STORAGE_KEY)
            .and_then(|text| serde_json::from_str::<Snapshot>(&text).ok());

        match snapshot {
            Some(Snapshot { fs, cwd }) => Self { root: fs, cwd, store },
            None => Self { root: default_tree(), cwd: HOME_DIR.to_string(), store },
        }
    }

    /// Ephemeral session backed by an in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Box::new(super::store::MemoryStore::new()))
    }

    /// Resolve a path (absolute, `~`-prefixed, or cwd-relative) into an
    /// absolute normalized path. Purely lexical; never consults the tree.
    pub fn resolve_path(&self, raw: &str) -> String {
        path::resolve(&self.cwd, raw)
    }

    /// Walk the tree to the node at `raw`, if any. Returns `None` when an
    /// intermediate segment is missing or is a file.
    pub fn get_node(&self, raw: &str) -> Option<&Node> {
        let resolved = self.resolve_path(raw);
        let mut current = &self.root;
        for part in resolved.split('/').filter(|p| !p.is_empty()) {
            current = current.children()?.get(part)?;
        }
        Some(current)
    }

    fn get_node_mut(&mut self, resolved: &str) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for part in resolved.split('/').filter(|p| !p.is_empty()) {
            current = current.children_mut()?.get_mut(part)?;
        }
        Some(current)
    }

    pub fn exists(&self, raw: &str) -> bool {
        self.get_node(raw).is_some()
    }

    pub fn is_directory(&self, raw: &str) -> bool {
        self.get_node(raw).map_or(false, Node::is_dir)
    }

    pub fn is_file(&self, raw: &str) -> bool {
        self.get_node(raw).map_or(false, Node::is_file)
    }

    /// List a directory's entries in stored (insertion) order, or `None` if
    /// the path does not resolve to a directory.
    pub fn list_dir(&self, raw: &str) -> Option<Vec<DirEntry>> {
        let children = self.get_node(raw)?.children()?;
        Some(
            children
                .iter()
                .map(|(name, node)| DirEntry { name: name.clone(), kind: node.kind() })
                .collect(),
        )
    }

    /// Read a file's content, or `None` if the path is not a file.
    pub fn read_file(&self, raw: &str) -> Option<&str> {
        match self.get_node(raw)? {
            Node::File { content } => Some(content),
            Node::Dir { .. } => None,
        }
    }

    /// Create or overwrite a file under the resolved parent.
    ///
    /// Deliberately permissive: an existing directory entry at that name is
    /// silently replaced by the file.
    pub fn write_file(&mut self, raw: &str, content: &str) -> Result<(), VfsError> {
        let resolved = self.resolve_path(raw);
        let (parent, name) = path::split_parent(&resolved).ok_or(VfsError::ParentMissing)?;

        let children = self
            .get_node_mut(parent)
            .and_then(Node::children_mut)
            .ok_or(VfsError::ParentMissing)?;

        children.insert(name.to_string(), Node::file(content));
        self.save();
        Ok(())
    }

    /// Create an empty directory. Fails when the parent is missing or an
    /// entry (file or directory) already exists at that name.
    pub fn mkdir(&mut self, raw: &str) -> Result<(), VfsError> {
        let resolved = self.resolve_path(raw);
        let (parent, name) = path::split_parent(&resolved).ok_or(VfsError::AlreadyExists)?;

        let children = self
            .get_node_mut(parent)
            .and_then(Node::children_mut)
            .ok_or(VfsError::ParentMissing)?;

        if children.contains_key(name) {
            return Err(VfsError::AlreadyExists);
        }
        children.insert(name.to_string(), Node::dir());
        self.save();
        Ok(())
    }

    /// Remove an entry. Removing a directory drops its whole subtree.
    pub fn rm(&mut self, raw: &str) -> Result<(), VfsError> {
        let resolved = self.resolve_path(raw);
        let (parent, name) = path::split_parent(&resolved).ok_or(VfsError::NotFound)?;

        let removed = self
            .get_node_mut(parent)
            .and_then(Node::children_mut)
            .and_then(|children| children.shift_remove(name));

        if removed.is_none() {
            return Err(VfsError::NotFound);
        }
        self.save();
        Ok(())
    }

    /// Change the working directory. On failure the cwd is left unchanged.
    pub fn cd(&mut self, raw: &str) -> Result<(), VfsError> {
        let resolved = self.resolve_path(raw);
        match self.get_node(&resolved) {
            None => Err(VfsError::NoSuchDirectory),
            Some(node) if node.is_file() => Err(VfsError::NotDirectory),
            Some(_) => {
                self.cwd = resolved;
                self.save();
                Ok(())
            }
        }
    }

    /// The absolute working directory.
    pub fn pwd(&self) -> &str {
        &self.cwd
    }

    /// The working directory with the home prefix shown as `~`.
    pub fn display_path(&self) -> String {
        match self.cwd.strip_prefix(HOME_DIR) {
            Some(rest) => format!("~{}", rest),
            None => self.cwd.clone(),
        }
    }

    /// Discard the tree and cwd, rebuild the default layout, and persist.
    pub fn reset(&mut self) {
        self.root = default_tree();
        self.cwd = HOME_DIR.to_string();
        self.save();
    }

    fn save(&mut self) {
        let snapshot = Snapshot { fs: self.root.clone(), cwd: self.cwd.clone() };
        if let Ok(text) = serde_json::to_string(&snapshot) {
            self.store.set(STORAGE_KEY, &text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::store::MemoryStore;
    use crate::vfs::types::NodeKind;

    #[test]
    fn test_starts_at_home_with_default_tree() {
        let vfs = Vfs::in_memory();
        assert_eq!(vfs.pwd(), "/home/user");
        assert!(vfs.is_file("welcome.txt"));
        assert!(vfs.is_directory("services"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let vfs = Vfs::in_memory();
        let resolved = vfs.resolve_path("services/../welcome.txt");
        assert_eq!(resolved, "/home/user/welcome.txt");
        assert_eq!(vfs.resolve_path(&resolved), resolved);
    }

    #[test]
    fn test_get_node_through_file_segment() {
        let vfs = Vfs::in_memory();
        // welcome.txt is a file; nothing resolves beneath it.
        assert!(vfs.get_node("welcome.txt/inner").is_none());
    }

    #[test]
    fn test_mkdir_then_list() {
        let mut vfs = Vfs::in_memory();
        vfs.mkdir("projects").unwrap();
        let entries = vfs.list_dir(".").unwrap();
        let count = entries.iter().filter(|e| e.name == "projects").count();
        assert_eq!(count, 1);
        assert_eq!(
            entries.iter().find(|e| e.name == "projects").unwrap().kind,
            NodeKind::Dir
        );

        assert_eq!(vfs.mkdir("projects"), Err(VfsError::AlreadyExists));
        assert_eq!(vfs.mkdir("welcome.txt"), Err(VfsError::AlreadyExists));
        assert_eq!(vfs.mkdir("/nope/child"), Err(VfsError::ParentMissing));
    }

    #[test]
    fn test_write_read_roundtrip_and_overwrite() {
        let mut vfs = Vfs::in_memory();
        vfs.write_file("notes.txt", "first").unwrap();
        assert_eq!(vfs.read_file("notes.txt"), Some("first"));

        vfs.write_file("notes.txt", "second").unwrap();
        assert_eq!(vfs.read_file("notes.txt"), Some("second"));

        assert_eq!(vfs.write_file("/nope/notes.txt", "x"), Err(VfsError::ParentMissing));
    }

    // Documented limitation: write_file does not guard against replacing an
    // existing directory entry with a file.
    #[test]
    fn test_write_file_replaces_directory() {
        let mut vfs = Vfs::in_memory();
        vfs.mkdir("stuff").unwrap();
        vfs.write_file("stuff/inner.txt", "x").unwrap();

        vfs.write_file("stuff", "now a file").unwrap();
        assert!(vfs.is_file("stuff"));
        assert!(vfs.get_node("stuff/inner.txt").is_none());
    }

    #[test]
    fn test_rm_removes_subtree() {
        let mut vfs = Vfs::in_memory();
        assert!(vfs.get_node("services/ai-consulting.txt").is_some());
        vfs.rm("services").unwrap();
        assert!(vfs.get_node("services").is_none());
        assert!(vfs.get_node("services/ai-consulting.txt").is_none());

        assert_eq!(vfs.rm("services"), Err(VfsError::NotFound));
    }

    #[test]
    fn test_cd_and_pwd() {
        let mut vfs = Vfs::in_memory();
        vfs.cd("..").unwrap();
        assert_eq!(vfs.pwd(), "/home");

        assert_eq!(vfs.cd("nonexistent"), Err(VfsError::NoSuchDirectory));
        assert_eq!(vfs.pwd(), "/home");

        assert_eq!(vfs.cd("user/welcome.txt"), Err(VfsError::NotDirectory));
        assert_eq!(vfs.pwd(), "/home");
    }

    #[test]
    fn test_display_path() {
        let mut vfs = Vfs::in_memory();
        assert_eq!(vfs.display_path(), "~");
        vfs.cd("services").unwrap();
        assert_eq!(vfs.display_path(), "~/services");
        vfs.cd("/").unwrap();
        assert_eq!(vfs.display_path(), "/");
    }

    #[test]
    fn test_root_mutations_rejected() {
        let mut vfs = Vfs::in_memory();
        assert_eq!(vfs.write_file("/", "x"), Err(VfsError::ParentMissing));
        assert_eq!(vfs.mkdir("/"), Err(VfsError::AlreadyExists));
        assert_eq!(vfs.rm("/"), Err(VfsError::NotFound));
    }

    #[test]
    fn test_reset_restores_default_layout() {
        let mut vfs = Vfs::in_memory();
        vfs.rm("welcome.txt").unwrap();
        vfs.mkdir("scratch").unwrap();
        vfs.cd("/").unwrap();

        vfs.reset();
        assert_eq!(vfs.pwd(), "/home/user");

        let fresh = Vfs::in_memory();
        assert_eq!(vfs.list_dir("/home/user"), fresh.list_dir("/home/user"));
    }

    #[test]
    fn test_persistence_roundtrip() {
        let mut store = MemoryStore::new();
        {
            let mut vfs = Vfs::new(Box::new(MemoryStore::new()));
            vfs.write_file("kept.txt", "still here").unwrap();
            vfs.cd("/home").unwrap();
            // Pull the snapshot out and seed a second store with it.
            store.set(STORAGE_KEY, &{
                let snapshot =
                    Snapshot { fs: vfs.root.clone(), cwd: vfs.cwd.clone() };
                serde_json::to_string(&snapshot).unwrap()
            });
        }

        let reloaded = Vfs::new(Box::new(store));
        assert_eq!(reloaded.pwd(), "/home");
        assert_eq!(reloaded.read_file("user/kept.txt"), Some("still here"));
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{ this is not a snapshot");
        let vfs = Vfs::new(Box::new(store));
        assert_eq!(vfs.pwd(), "/home/user");
        assert!(vfs.is_file("welcome.txt"));
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut vfs = Vfs::in_memory();
        vfs.write_file("a.txt", "a").unwrap();
        let after_write = vfs.store.get(STORAGE_KEY).unwrap();
        assert!(after_write.contains("a.txt"));

        vfs.cd("/home").unwrap();
        let after_cd = vfs.store.get(STORAGE_KEY).unwrap();
        assert!(after_cd.contains(r#""cwd":"/home""#));
    }
}
