//! Runs one assist request end to end.

use crate::config::{process_env, AiConfig, CredentialStatus, EnvLookup};

use super::dispatcher::{ModelCandidates, ModelDispatcher};
use super::error::AiError;
use super::prompt::build_prompt;
use super::response::{extract_text, parse_tags};
use super::types::{Action, AssistRequest, AssistResponse};

pub struct AssistService {
    config: AiConfig,
    env: EnvLookup,
    dispatcher: ModelDispatcher,
}

impl AssistService {
    /// Service reading `GEMINI_API_KEY` / `GEMINI_MODEL` from the process environment.
    pub fn new(config: AiConfig) -> Result<Self, AiError> {
        Self::with_env(config, process_env())
    }

    /// Service resolving environment fallbacks through `env`.
    pub fn with_env(config: AiConfig, env: EnvLookup) -> Result<Self, AiError> {
        let candidates = ModelCandidates::from_model(config.resolve_model_with(|name| env(name)));
        tracing::debug!(candidates = ?candidates.as_slice(), "AI model candidates resolved");
        let dispatcher = ModelDispatcher::new(&config, candidates)?;
        Ok(Self {
            config,
            env,
            dispatcher,
        })
    }

    /// Credential check, validation, prompt, dispatch, post-processing.
    pub async fn assist(&self, request: &AssistRequest) -> Result<AssistResponse, AiError> {
        let api_key = match self.config.resolve_credential_with(|name| (self.env)(name)) {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                tracing::error!(reason = %reason, "AI provider key missing");
                return Err(AiError::MissingApiKey);
            }
        };

        validate(request)?;

        let prompt = build_prompt(request);
        tracing::info!(action = %request.action, prompt_len = prompt.len(), "Dispatching assist request");
        let response = self.dispatcher.dispatch(&api_key, &prompt).await?;
        let text = extract_text(&response)?;

        let tags = match request.action {
            Action::Tags => Some(parse_tags(&text)),
            _ => None,
        };

        Ok(AssistResponse { text, tags })
    }
}

/// Action-specific input checks that must pass before any network call.
pub fn validate(request: &AssistRequest) -> Result<(), AiError> {
    if request.action == Action::Ask {
        if is_blank(request.question.as_deref()) {
            return Err(AiError::Validation("Question is required".to_string()));
        }
        if is_blank(request.notes_context.as_deref()) {
            return Err(AiError::Validation("Notes context is required".to_string()));
        }
    }
    Ok(())
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
