//! Chat domain: conversation threads, messages, and outgoing drafts.

pub mod draft;
pub mod entities;
