//! Interactive chat REPL

mod repl;

pub use repl::ChatRepl;
