//! Infrastructure layer for haichat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod openrouter;
pub mod persistence;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileHistoryConfig, FileProviderConfig, FileReplConfig,
};
pub use openrouter::gateway::OpenRouterGateway;
pub use persistence::file_store::FileHistoryStore;
