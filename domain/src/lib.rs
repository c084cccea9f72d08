//! Domain layer for haichat
//!
//! This crate contains the core chat entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Thread**: a named, persisted sequence of messages forming one
//!   conversation. Append-only except for whole-thread deletion.
//! - **Draft**: an outgoing user turn before it is committed to a thread.
//!   It distinguishes the *display* content (with attachment annotation)
//!   from the *wire* text sent to the completion backend.

pub mod chat;
pub mod util;

// Re-export commonly used types
pub use chat::{
    draft::Draft,
    entities::{Message, Role, Thread, ThreadSummary},
};
pub use util::truncate_chars;
