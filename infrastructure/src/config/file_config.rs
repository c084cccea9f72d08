//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! are deserialized directly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion backend settings (`[provider]`)
    pub provider: FileProviderConfig,
    /// History persistence settings (`[history]`)
    pub history: FileHistoryConfig,
    /// REPL settings (`[repl]`)
    pub repl: FileReplConfig,
}

/// OpenRouter provider configuration (`[provider]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "OPENROUTER_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenRouter API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Token cap per response.
    pub max_tokens: u32,
    /// `HTTP-Referer` header value identifying the app to OpenRouter.
    pub http_referer: String,
    /// `X-Title` header value identifying the app to OpenRouter.
    pub app_title: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            api_key: None,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "meta-llama/llama-3.2-3b-instruct:free".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            http_referer: "http://localhost:3000".to_string(),
            app_title: "HaiAI".to_string(),
        }
    }
}

impl FileProviderConfig {
    /// A directly configured key wins; otherwise the env var is consulted.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key
            && !key.is_empty()
        {
            return Some(key.clone());
        }
        std::env::var(&self.api_key_env).ok().filter(|k| !k.is_empty())
    }
}

/// History persistence configuration (`[history]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Override for the history record path
    /// (default: `{data_dir}/haichat/history.json`).
    pub path: Option<PathBuf>,
    /// Number of most-recent prior messages sent as request context.
    pub window: usize,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            window: 10,
        }
    }
}

/// REPL configuration (`[repl]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the welcome line on a fresh session.
    pub show_welcome: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self { show_welcome: true }
    }
}
