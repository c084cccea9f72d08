//! Completion gateway port
//!
//! Defines the interface for sending a conversation turn to the remote
//! completion backend. The adapter translates local roles into the backend's
//! role vocabulary and always prepends the fixed system instruction as the
//! first wire entry.

use async_trait::async_trait;
use haichat_domain::Role;
use thiserror::Error;

/// Errors that can occur during a completion request.
///
/// None of these propagate to the presentation layer as errors: the session
/// manager converts each into a normal assistant message via
/// [`user_facing_text()`](GatewayError::user_facing_text).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Backend credential is missing or still a placeholder. Rendered as a
    /// setup instruction rather than a generic error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The remote call completed but reported a non-success status.
    #[error("backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    /// The call did not complete (network failure, malformed response).
    #[error("transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    /// The text shown to the user as the assistant's reply for this failure.
    pub fn user_facing_text(&self) -> String {
        match self {
            GatewayError::Configuration(_) => {
                "API key not configured. Get your free key at https://openrouter.ai/keys"
                    .to_string()
            }
            GatewayError::Backend { message, .. } => message.clone(),
            GatewayError::Transport(_) => {
                "Sorry, something went wrong. Please try again.".to_string()
            }
        }
    }
}

/// Role tag of a prior turn on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
}

impl From<Role> for TurnRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => TurnRole::User,
            Role::Assistant => TurnRole::Assistant,
        }
    }
}

/// One prior turn of conversation context.
#[derive(Debug, Clone)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
}

/// A complete completion request: fixed system instruction, bounded prior
/// history, and the new user text.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub prior_turns: Vec<Turn>,
    pub new_user_text: String,
}

/// Gateway for the remote completion backend.
///
/// Returns the assistant's reply text or a classified failure. The gateway
/// performs no retries; a failed turn requires the user to resend.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
