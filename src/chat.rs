//! Chat Transport Contract
//!
//! The `ask` builtin only signals a mode switch; actually answering is the
//! job of an external transport. This module carries the contract the caller
//! hands chat-mode lines to: a role-tagged message history in, a stream of
//! incremental reply tokens out. The caller intercepts `exit` and `clear`
//! before any line reaches the transport.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("chat transport failed: {0}")]
    Transport(String),
}

/// A streaming chat backend. `send` takes the full history and returns the
/// reply as an iterator of incremental text chunks.
pub trait ChatTransport {
    fn send(
        &mut self,
        history: &[ChatMessage],
    ) -> Result<Box<dyn Iterator<Item = String>>, ChatError>;
}

/// Transport that replays canned replies in order, then errors. For tests
/// and offline demos.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Vec<String>,
    next: usize,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<String>) -> Self {
        Self { replies, next: 0 }
    }
}

impl ChatTransport for ScriptedTransport {
    fn send(
        &mut self,
        _history: &[ChatMessage],
    ) -> Result<Box<dyn Iterator<Item = String>>, ChatError> {
        let reply = self
            .replies
            .get(self.next)
            .cloned()
            .ok_or_else(|| ChatError::Transport("no scripted replies left".to_string()))?;
        self.next += 1;
        // Stream word by word, the way a token stream arrives.
        let chunks: Vec<String> = reply.split_inclusive(' ').map(str::to_string).collect();
        Ok(Box::new(chunks.into_iter()))
    }
}
