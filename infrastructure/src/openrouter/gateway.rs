//! OpenRouter completion gateway.
//!
//! Implements the [`CompletionGateway`] port over the OpenRouter
//! chat-completions endpoint: bearer-authenticated POST, fixed system
//! instruction first, prior turns translated to the wire role vocabulary,
//! then the new user turn. No retries: a failed turn is classified and
//! returned to the session manager, which surfaces it as conversation text.

use crate::config::FileProviderConfig;
use crate::openrouter::protocol::{
    CompletionsBody, CompletionsResponse, ErrorResponse, WireMessage,
};
use async_trait::async_trait;
use haichat_application::{CompletionGateway, CompletionRequest, GatewayError, TurnRole};
use tracing::{debug, warn};

/// Reply used when the backend answers successfully but with no content.
const EMPTY_REPLY_FALLBACK: &str = "Sorry, I could not generate a response.";

/// Error message used when a non-success response has no structured body.
const GENERIC_BACKEND_ERROR: &str = "Failed to get response";

/// Placeholder value that counts as "no credential configured".
const PLACEHOLDER_KEY: &str = "your_api_key_here";

/// Gateway adapter for the OpenRouter chat completions API.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    http_referer: String,
    app_title: String,
}

impl OpenRouterGateway {
    pub fn from_config(config: &FileProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.resolve_api_key(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            http_referer: config.http_referer.clone(),
            app_title: config.app_title.clone(),
        }
    }

    /// The usable credential, or a [`GatewayError::Configuration`] when the
    /// key is absent or still the placeholder.
    fn credential(&self) -> Result<&str, GatewayError> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_KEY => Ok(key),
            _ => Err(GatewayError::Configuration(
                "OpenRouter API key missing or placeholder".to_string(),
            )),
        }
    }

    /// Assemble the wire message array: system instruction first, prior
    /// turns in order, the new user turn last.
    fn build_messages(request: &CompletionRequest) -> Vec<WireMessage> {
        let mut messages = Vec::with_capacity(request.prior_turns.len() + 2);
        messages.push(WireMessage::system(&request.system_instruction));
        for turn in &request.prior_turns {
            messages.push(match turn.role {
                TurnRole::User => WireMessage::user(&turn.content),
                TurnRole::Assistant => WireMessage::assistant(&turn.content),
            });
        }
        messages.push(WireMessage::user(&request.new_user_text));
        messages
    }
}

#[async_trait]
impl CompletionGateway for OpenRouterGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let key = self.credential()?;

        let body = CompletionsBody {
            model: self.model.clone(),
            messages: Self::build_messages(request),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(
            "POST {}/chat/completions ({} wire message(s), model: {})",
            self.base_url,
            body.messages.len(),
            self.model
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(key)
            .header("HTTP-Referer", &self.http_referer)
            .header("X-Title", &self.app_title)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|e| e.error.message)
                .unwrap_or_else(|_| GENERIC_BACKEND_ERROR.to_string());
            warn!("OpenRouter rejected the request: {} {}", status, message);
            return Err(GatewayError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: CompletionsResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(format!("malformed response: {e}")))?;

        Ok(parsed
            .reply_text()
            .unwrap_or(EMPTY_REPLY_FALLBACK)
            .to_string())
    }
}
