//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for haichat
#[derive(Parser, Debug)]
#[command(name = "haichat")]
#[command(author, version, about = "Conversational AI chat client with persistent threads")]
#[command(long_about = r#"
haichat is a terminal chat client for an OpenRouter-backed AI assistant.

Conversations are kept as named threads persisted across sessions. Without a
message argument an interactive REPL starts; with one, a single turn is sent
and the reply printed.

Inside the REPL, words starting with '@' attach files by name
(e.g. "look at @diagram.png"), and slash commands manage threads:
/new, /list, /select <n>, /delete <n>, /help, /quit.

Configuration files are loaded from (in priority order):
1. --config <path>      Explicit config file
2. ./haichat.toml       Project-level config
3. ~/.config/haichat/config.toml   Global config

Example:
  haichat "Explain recursion"
  haichat --chat
  OPENROUTER_API_KEY=sk-... haichat
"#)]
pub struct Cli {
    /// One-shot message to send (omit to start the interactive REPL)
    pub message: Option<String>,

    /// Start interactive chat mode (default when no message is given)
    #[arg(short, long)]
    pub chat: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Keep everything in memory; load and persist nothing
    #[arg(long)]
    pub ephemeral: bool,
}
