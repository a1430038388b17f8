//! Sends prompts to the generative-AI provider with ordered model fallback.
//!
//! Candidates are tried strictly in order. Only a 404 ("model not found")
//! moves on to the next candidate; every other failure ends the dispatch.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode, Url};

use crate::config::{AiConfig, SecureString};

use super::error::AiError;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

/// Models tried in order when no explicit model is configured.
pub const DEFAULT_MODELS: [&str; 3] = ["gemini-2.0-flash", "gemini-1.5-flash", "gemini-1.5-pro"];

const TEMPERATURE: f64 = 0.6;
const TOP_P: f64 = 0.9;
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Non-empty ordered list of model identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCandidates(Vec<String>);

impl ModelCandidates {
    /// A single explicit model, or the default fallback sequence.
    pub fn from_model(model: Option<String>) -> Self {
        match model {
            Some(model) => Self(vec![model]),
            None => Self::defaults(),
        }
    }

    pub fn defaults() -> Self {
        Self(DEFAULT_MODELS.iter().map(|m| m.to_string()).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Client for the provider's `generateContent` endpoint.
pub struct ModelDispatcher {
    client: Client,
    base_url: String,
    candidates: ModelCandidates,
}

impl ModelDispatcher {
    pub fn new(config: &AiConfig, candidates: ModelCandidates) -> Result<Self, AiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            candidates,
        })
    }

    /// Send `prompt` and return the first successful provider response.
    pub async fn dispatch(
        &self,
        api_key: &SecureString,
        prompt: &str,
    ) -> Result<GenerateContentResponse, AiError> {
        let body = build_request(prompt);
        let mut remaining = self.candidates.as_slice().iter().peekable();

        while let Some(model) = remaining.next() {
            let url = self.endpoint(model, api_key)?;

            tracing::debug!(model = %model, "Sending generateContent request");
            let start = Instant::now();
            let response = self
                .client
                .post(url)
                .json(&body)
                .send()
                .await
                .map_err(transport_error)?;
            let latency_ms = start.elapsed().as_millis() as u64;
            let status = response.status();

            if status.is_success() {
                tracing::info!(model = %model, latency_ms, "AI provider responded");
                let text = response.text().await.map_err(transport_error)?;
                return serde_json::from_str(&text)
                    .map_err(|e| AiError::MalformedResponse(e.to_string()));
            }

            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            if status == StatusCode::NOT_FOUND && remaining.peek().is_some() {
                tracing::warn!(model = %model, "Model not found, trying next candidate");
                continue;
            }

            tracing::error!(
                model = %model,
                status = %status,
                latency_ms,
                "AI provider error"
            );
            return Err(AiError::Upstream {
                status: status.as_u16(),
                body: error_body,
            });
        }

        Err(AiError::InvalidEndpoint("no candidate models configured".to_string()))
    }

    /// `{base_url}/v1beta/models/{model}:generateContent?key=...` with the
    /// model percent-encoded as a single path segment.
    fn endpoint(&self, model: &str, api_key: &SecureString) -> Result<Url, AiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AiError::InvalidEndpoint(format!("{}: {}", self.base_url, e)))?;

        let method = format!("{}:generateContent", model);
        url.path_segments_mut()
            .map_err(|_| AiError::InvalidEndpoint(format!("{} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(["v1beta", "models", method.as_str()]);
        url.query_pairs_mut().append_pair("key", api_key.expose());

        Ok(url)
    }
}

/// Transport errors carry the request URL, which holds the API key.
fn transport_error(err: reqwest::Error) -> AiError {
    AiError::Connection(err.without_url())
}

/// Build the provider request body for a single user prompt.
pub fn build_request(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(prompt.to_string()),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    }
}
