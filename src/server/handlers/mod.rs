//! HTTP request handlers for the API server.

mod api;
mod ollama;
mod stubs;
mod types;

// Re-export handlers for use by the router
pub use api::{health, ollama_health};
pub use ollama::{ollama_test, SAMPLE_TEXT};
pub use stubs::{chat, list_threads, search, thread_detail};
pub use types::{ApiError, TestRequest, TestResponse};
