//! Application layer for haichat
//!
//! This crate contains the session manager use case and the port definitions
//! it drives. It depends only on the domain layer; adapters for the ports
//! live in the infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion_gateway::{
        CompletionGateway, CompletionRequest, GatewayError, Turn, TurnRole,
    },
    history_store::{HistoryStore, NoHistoryStore},
};
pub use use_cases::chat_session::{ChatSession, SessionError, SYSTEM_INSTRUCTION};
