//! Chat domain entities

use crate::util::truncate_chars;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of characters of the first user message used for a
/// thread title before an ellipsis marker is appended.
const TITLE_MAX_CHARS: usize = 30;

/// Author of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A message in a conversation (Entity)
///
/// Immutable once created. Ordering within a thread is insertion order
/// and must never be re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// A conversation thread (Entity)
///
/// A thread owns an append-only message sequence and a title fixed at
/// creation from the first user message. Messages are only ever extended;
/// the sole destructive operation is deleting the whole thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    id: String,
    title: String,
    messages: Vec<Message>,
    updated_at: DateTime<Utc>,
}

impl Thread {
    /// Create a thread from the first user turn.
    ///
    /// `title_source` is the raw text of that turn; the title is its first
    /// 30 characters, with `"..."` appended when it was longer.
    pub fn new(title_source: &str, messages: Vec<Message>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: Self::derive_title(title_source),
            messages,
            updated_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the stored message sequence with an extended copy.
    ///
    /// The thread is append-only: callers must only ever pass a sequence
    /// that begins with the current one.
    pub fn update_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.updated_at = Utc::now();
    }

    pub fn summary(&self) -> ThreadSummary {
        ThreadSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            updated_at: self.updated_at,
        }
    }

    fn derive_title(text: &str) -> String {
        let text = text.trim();
        let head = truncate_chars(text, TITLE_MAX_CHARS);
        if head.len() < text.len() {
            format!("{head}...")
        } else {
            head.to_string()
        }
    }
}

/// Lightweight view of a thread for list rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub id: String,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}
