//! Virtual File System Types
//!
//! Core types for the virtual file system tree and its failure modes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File system errors. Display strings are the reason texts the interpreter
/// surfaces to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("Parent directory does not exist")]
    ParentMissing,

    #[error("Already exists")]
    AlreadyExists,

    #[error("No such file or directory")]
    NotFound,

    #[error("No such directory")]
    NoSuchDirectory,

    #[error("Not a directory")]
    NotDirectory,
}

/// A node in the virtual file system tree.
///
/// Serializes as `{"type":"dir","children":{...}}` or
/// `{"type":"file","content":"..."}`, the same wire shape the persisted
/// snapshot uses. Directory children keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "dir")]
    Dir { children: IndexMap<String, Node> },
    #[serde(rename = "file")]
    File { content: String },
}

impl Node {
    /// Create an empty directory node.
    pub fn dir() -> Self {
        Node::Dir { children: IndexMap::new() }
    }

    /// Create a file node with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File { content: content.into() }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// Children of a directory node, or `None` for a file.
    pub fn children(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Dir { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut IndexMap<String, Node>> {
        match self {
            Node::Dir { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Dir { .. } => NodeKind::Dir,
            Node::File { .. } => NodeKind::File,
        }
    }
}

/// Entry type tag for directory listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Dir,
    File,
}

/// A directory listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
}
