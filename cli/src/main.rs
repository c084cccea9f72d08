//! CLI entrypoint for haichat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use haichat_application::{ChatSession, CompletionGateway, HistoryStore, NoHistoryStore};
use haichat_infrastructure::{ConfigLoader, FileHistoryStore, OpenRouterGateway};
use haichat_presentation::{ChatRepl, Cli};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting haichat");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("failed to load configuration")?
    };

    // === Dependency Injection ===
    let gateway: Arc<dyn CompletionGateway> =
        Arc::new(OpenRouterGateway::from_config(&config.provider));

    let store: Arc<dyn HistoryStore> = if cli.ephemeral {
        Arc::new(NoHistoryStore)
    } else {
        let path = config
            .history
            .path
            .clone()
            .or_else(FileHistoryStore::default_path);
        match path {
            Some(path) => Arc::new(FileHistoryStore::new(path)),
            None => bail!("no usable data directory; rerun with --ephemeral"),
        }
    };

    let session = ChatSession::new(gateway, store).with_history_window(config.history.window);

    // Single message mode
    if let Some(message) = cli.message {
        let mut session = session;
        session
            .send_message(&message, Vec::new())
            .await
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        if let Some(reply) = session.messages().last() {
            println!("{}", reply.content);
        }
        return Ok(());
    }

    // Chat mode (default)
    let mut repl = ChatRepl::new(session).with_welcome(config.repl.show_welcome);
    repl.run().await?;

    Ok(())
}
