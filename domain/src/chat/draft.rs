//! Outgoing draft value object.
//!
//! A [`Draft`] is a user turn before it is committed to a thread. It keeps
//! two views of the same turn apart: [`display_content()`](Draft::display_content)
//! is what gets stored and rendered, including an annotation naming any
//! attached files, while [`wire_text()`](Draft::wire_text) is what goes to
//! the completion backend. The annotation is never part of the wire text;
//! files are referenced by name locally and never transmitted.

/// An outgoing user turn: text plus attachment references (file names only).
#[derive(Debug, Clone, Default)]
pub struct Draft {
    text: String,
    attachments: Vec<String>,
}

impl Draft {
    pub fn new(text: impl Into<String>, attachments: Vec<String>) -> Self {
        Self {
            text: text.into(),
            attachments,
        }
    }

    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// True when there is nothing to send: blank text and no attachments.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.attachments.is_empty()
    }

    /// The trimmed raw text sent to the backend.
    pub fn wire_text(&self) -> &str {
        self.text.trim()
    }

    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    /// The content stored in the thread and shown to the user.
    ///
    /// With attachments present, their names are appended as an annotation;
    /// an attachment-only draft is just the annotation.
    pub fn display_content(&self) -> String {
        let text = self.text.trim();
        if self.attachments.is_empty() {
            return text.to_string();
        }
        let names = self.attachments.join(", ");
        if text.is_empty() {
            format!("📎 Attached: {names}")
        } else {
            format!("{text}\n\n📎 Attached: {names}")
        }
    }
}
