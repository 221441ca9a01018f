//! Placeholder endpoints for threads, search and chat.
//!
//! These return fixed shapes until the mailbox store exists.

use axum::{extract::Path, Json};
use serde_json::{json, Value};

pub async fn list_threads() -> Json<Value> {
    Json(json!({ "threads": [] }))
}

pub async fn thread_detail(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "id": id,
        "subject": "stub"
    }))
}

pub async fn search() -> Json<Value> {
    Json(json!({ "results": [] }))
}

pub async fn chat() -> Json<Value> {
    Json(json!({
        "answer": "stub",
        "citations": []
    }))
}
