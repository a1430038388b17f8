//! Credential and model resolution from configuration.
//!
//! The provider key may live in the config file or in the process
//! environment. Resolution happens on demand and is never cached, so a
//! key exported after startup is picked up by the next request.

use std::sync::Arc;

use super::types::AiConfig;

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable selecting an explicit model.
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Environment access used for key and model resolution.
pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Lookup backed by the real process environment.
pub fn process_env() -> EnvLookup {
    Arc::new(|name: &str| std::env::var(name).ok())
}

/// Lookup that sees an empty environment.
pub fn empty_env() -> EnvLookup {
    Arc::new(|_: &str| None)
}

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the AI provider.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl AiConfig {
    /// Resolve the API key from config, then from `GEMINI_API_KEY` via `lookup`.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = self
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()));

        match key {
            Some(key) => CredentialStatus::Configured(SecureString::new(key)),
            None => CredentialStatus::Unconfigured {
                reason: format!("api_key is not set and {} is empty", API_KEY_ENV),
            },
        }
    }

    /// Explicit model from config, then from `GEMINI_MODEL` via `lookup`.
    pub fn resolve_model_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.model
            .clone()
            .or_else(|| lookup(MODEL_ENV))
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
