//! In-process stand-in for the Ollama API used by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<Value>>>,
    responses: Arc<Vec<String>>,
}

impl Recorder {
    fn record(&self, body: Option<Value>) -> usize {
        if let Some(body) = body {
            self.bodies.lock().unwrap().push(body);
        }
        self.calls.fetch_add(1, Ordering::SeqCst)
    }
}

/// Mock backend bound to an ephemeral localhost port.
pub struct MockBackend {
    pub url: String,
    recorder: Recorder,
    task: JoinHandle<()>,
}

impl MockBackend {
    /// Ollama-shaped backend. Generation replies cycle through `responses`.
    pub async fn ollama(responses: &[&str]) -> Self {
        let recorder = Recorder {
            responses: Arc::new(responses.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        };

        let app = Router::new()
            .route("/api/generate", post(generate))
            .route("/api/embeddings", post(embeddings))
            .route("/api/tags", get(tags))
            .with_state(recorder.clone());

        Self::serve(app, recorder).await
    }

    /// Backend answering every request with the same status and body.
    pub async fn fixed(status: StatusCode, body: &'static str) -> Self {
        let recorder = Recorder::default();
        let counter = recorder.clone();
        let app = Router::new().fallback(move || {
            let counter = counter.clone();
            async move {
                counter.record(None);
                (status, body)
            }
        });

        Self::serve(app, recorder).await
    }

    async fn serve(app: Router, recorder: Recorder) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            recorder,
            task,
        }
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.recorder.calls.load(Ordering::SeqCst)
    }

    /// JSON bodies received so far, in arrival order.
    pub fn bodies(&self) -> Vec<Value> {
        self.recorder.bodies.lock().unwrap().clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn generate(State(recorder): State<Recorder>, Json(body): Json<Value>) -> Json<Value> {
    let model = body["model"].clone();
    let index = recorder.record(Some(body));
    let text = if recorder.responses.is_empty() {
        String::new()
    } else {
        recorder.responses[index % recorder.responses.len()].clone()
    };

    Json(json!({
        "model": model,
        "created_at": "2024-01-01T00:00:00Z",
        "response": text,
        "done": true,
        "total_duration": 1_200_000,
        "eval_count": 12
    }))
}

async fn embeddings(State(recorder): State<Recorder>, Json(body): Json<Value>) -> Json<Value> {
    recorder.record(Some(body));
    Json(json!({ "embedding": [0.5, -1.25, 3.0] }))
}

async fn tags(State(recorder): State<Recorder>) -> Json<Value> {
    recorder.record(None);
    Json(json!({
        "models": [
            { "name": "mistral:7b-instruct" },
            { "name": "nomic-embed-text:latest" }
        ]
    }))
}
