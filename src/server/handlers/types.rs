//! Request/response bodies and the error type shared by handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::llm::LlmError;

/// Body of `POST /ollama/test`.
#[derive(Debug, Default, Deserialize)]
pub struct TestRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Result of `POST /ollama/test`.
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub input_text: String,
    pub summary: String,
    pub category: String,
    pub model: String,
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was not valid JSON for the endpoint.
    #[error("Invalid JSON body")]
    InvalidJson(#[source] serde_json::Error),

    /// A step of an LLM pipeline failed.
    #[error("{stage} failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: LlmError,
    },

    /// The inference backend did not answer its liveness probe.
    #[error("{0}")]
    Unhealthy(#[source] LlmError),
}

impl ApiError {
    pub fn stage(stage: &'static str) -> impl FnOnce(LlmError) -> Self {
        move |source| ApiError::Stage { stage, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::InvalidJson(e) => {
                debug!(error = %e, "Rejected request body");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Stage { stage, .. } => {
                error!(stage, error = %message, "LLM pipeline failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
            ApiError::Unhealthy(_) => {
                warn!(error = %message, "Inference backend unhealthy");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "status": "unhealthy", "error": message })),
                )
                    .into_response()
            }
        }
    }
}
