use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

/// Generative-AI provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Base URL of the provider (e.g., "https://generativelanguage.googleapis.com").
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    /// Direct API key. Falls back to `GEMINI_API_KEY` when unset.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Explicit model identifier. Falls back to `GEMINI_MODEL`, then to the
    /// built-in candidate list.
    #[serde(default)]
    pub model: Option<String>,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_ai_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_connect_timeout() -> u32 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_ai_base_url(),
            api_key: None,
            model: None,
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}
