//! Router configuration for the API server.

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;

use super::handlers;
use super::middleware::{cors, log_requests, read_deadline};
use super::AppState;
use crate::config::ServerConfig;

/// Create the main router with all routes.
///
/// Layers run outermost first: CORS, access log, body read deadline, response deadline.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // LLM gateway
        .route("/ollama/health", get(handlers::ollama_health))
        .route("/ollama/test", post(handlers::ollama_test))
        // Mailbox placeholders
        .route("/threads", get(handlers::list_threads))
        .route("/threads/:id", get(handlers::thread_detail))
        .route("/search", post(handlers::search))
        .route("/chat", post(handlers::chat))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.write_timeout,
        ))
        .layer(middleware::from_fn_with_state(
            config.read_timeout,
            read_deadline,
        ))
        .layer(middleware::from_fn(log_requests))
        .layer(middleware::from_fn(cors))
        .with_state(state)
}
