use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::Instrument;

use crate::ai::{AiError, AssistRequest, AssistService};
use crate::server::health::health;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub assist: Arc<AssistService>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/ai", post(assist_handler))
        .with_state(state)
}

/// `POST /api/ai`
///
/// The body is parsed by hand so that malformed JSON and unknown actions
/// come back in the same `{ "error": ... }` shape as every other failure.
async fn assist_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!("assist", request_id = %request_id);

    let mut response = async move {
        let request: AssistRequest = match serde_json::from_slice(&body) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected assist request body");
                return AiError::Validation(format!("Invalid request: {}", e)).into_response();
            }
        };

        match state.assist.assist(&request).await {
            Ok(result) => (StatusCode::OK, Json(result)).into_response(),
            Err(err) => {
                tracing::warn!(
                    action = %request.action,
                    error_type = err.error_type(),
                    status = err.status_code().as_u16(),
                    "Assist request failed"
                );
                err.into_response()
            }
        }
    }
    .instrument(span)
    .await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
