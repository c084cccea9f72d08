//! Presentation layer for haichat
//!
//! This crate contains the CLI definition, console output formatting, and
//! the interactive chat REPL. It only consumes the session manager's
//! observable state and commands; all conversation logic lives in the
//! application layer.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
