//! End-to-end exercise of the email LLM operations.

use axum::{body::Bytes, extract::State, Json};
use tracing::info;

use super::super::AppState;
use super::types::{ApiError, TestRequest, TestResponse};

/// Text used when the request does not provide any.
pub const SAMPLE_TEXT: &str = "Hello, this is a test message for AI processing.";

/// Summarize then classify the given text.
///
/// The body is decoded before any backend call so malformed input costs nothing.
pub async fn ollama_test(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TestResponse>, ApiError> {
    // A literal `null` body is treated like `{}`.
    let request = serde_json::from_slice::<Option<TestRequest>>(&body)
        .map_err(ApiError::InvalidJson)?
        .unwrap_or_default();
    let text = request
        .text
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| SAMPLE_TEXT.to_string());

    let summary = state
        .llm
        .summarize_email(&text)
        .await
        .map_err(ApiError::stage("Summarization"))?;

    let category = state
        .llm
        .classify_email(&text)
        .await
        .map_err(ApiError::stage("Classification"))?;

    info!(category = %category, "LLM test complete");

    Ok(Json(TestResponse {
        input_text: text,
        summary,
        category,
        model: state.llm.config().model.clone(),
    }))
}
