//! Health endpoints.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::super::AppState;
use super::types::ApiError;

/// Liveness of this service.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Liveness of the Ollama backend.
pub async fn ollama_health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.llm.health_check().await.map_err(ApiError::Unhealthy)?;

    Ok(Json(json!({
        "status": "healthy",
        "service": "ollama"
    })))
}
