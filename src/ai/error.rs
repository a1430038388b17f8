//! Error types for the assist pipeline and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while serving one assist request.
#[derive(Debug, Error)]
pub enum AiError {
    /// Provider API key is not configured
    #[error("AI provider API key is not configured")]
    MissingApiKey,

    /// Request is missing action-specific input or is malformed
    #[error("{0}")]
    Validation(String),

    /// Provider returned a non-success status after all candidates were tried
    #[error("{body}")]
    Upstream { status: u16, body: String },

    /// Provider answered 2xx without any usable text
    #[error("AI provider returned no text")]
    EmptyResult,

    /// Provider answered 2xx with a body we could not decode
    #[error("Malformed AI provider response: {0}")]
    MalformedResponse(String),

    /// Provider URL could not be built for a model
    #[error("Invalid AI provider endpoint: {0}")]
    InvalidEndpoint(String),

    /// Failed to reach the provider
    #[error("Failed to reach AI provider: {0}")]
    Connection(#[source] reqwest::Error),
}

impl AiError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AiError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            AiError::Validation(_) => StatusCode::BAD_REQUEST,
            AiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AiError::EmptyResult => StatusCode::INTERNAL_SERVER_ERROR,
            AiError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AiError::InvalidEndpoint(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AiError::Connection(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short classification used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            AiError::MissingApiKey => "config_error",
            AiError::Validation(_) => "validation_error",
            AiError::Upstream { .. } => "upstream_error",
            AiError::EmptyResult => "empty_result",
            AiError::MalformedResponse(_) => "malformed_response",
            AiError::InvalidEndpoint(_) => "config_error",
            AiError::Connection(_) => "connection_error",
        }
    }
}

impl IntoResponse for AiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
