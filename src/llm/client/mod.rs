//! LLM client for the Ollama inference backend.
//!
//! Wraps the three backend operations the API relies on: text generation,
//! embeddings, and a liveness probe. Every call is a single attempt bounded by
//! the configured timeout; failures are surfaced to the caller as [`LlmError`].

mod config;
mod types;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub use config::LlmConfig;
pub use types::{
    EmbeddingRequest, EmbeddingResponse, GenerateOptions, GenerateRequest, GenerateResponse,
};

use types::TagsResponse;

/// LLM client. Holds only immutable configuration and a pooled HTTP client,
/// so one instance can be shared across concurrent requests.
#[derive(Debug, Clone)]
pub struct LlmClient {
    config: LlmConfig,
    client: Client,
}

impl LlmClient {
    /// Create a new LLM client with the given configuration.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LlmError::Client)?;

        Ok(Self { config, client })
    }

    /// Get the config.
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Sampling options applied to every generation issued by this client.
    pub fn default_options(&self) -> GenerateOptions {
        GenerateOptions {
            temperature: Some(self.config.temperature),
            top_p: Some(self.config.top_p),
            num_predict: Some(self.config.max_tokens),
            ..Default::default()
        }
    }

    /// Generate text and return only the model output.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<String, LlmError> {
        let mut request = GenerateRequest::new(model, prompt).with_options(self.default_options());
        if let Some(system) = system {
            request = request.with_system(system);
        }

        let response = self.generate_request(&request).await?;
        Ok(response.response)
    }

    /// Issue a caller-built generation request and return the full response.
    pub async fn generate_request(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, LlmError> {
        debug!(model = %request.model, prompt_len = request.prompt.len(), "generate");

        let resp = self
            .client
            .post(self.config.url("/api/generate"))
            .json(request)
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let generated: GenerateResponse = decode(check_status(resp).await?).await?;
        debug!(
            model = %generated.model,
            eval_count = ?generated.eval_count,
            total_duration = ?generated.total_duration,
            "generate complete"
        );
        Ok(generated)
    }

    /// Generate an embedding vector. The vector is returned as-is.
    pub async fn embed(&self, model: &str, text: &str) -> Result<Vec<f64>, LlmError> {
        let request = EmbeddingRequest {
            model: model.to_string(),
            prompt: text.to_string(),
        };

        debug!(model, text_len = text.len(), "embed");
        let resp = self
            .client
            .post(self.config.url("/api/embeddings"))
            .json(&request)
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let embedding: EmbeddingResponse = decode(check_status(resp).await?).await?;
        Ok(embedding.embedding)
    }

    /// Check that the backend answers its model listing endpoint.
    ///
    /// This is a liveness probe only; it does not verify that any model is loaded.
    pub async fn health_check(&self) -> Result<(), LlmError> {
        let resp = self
            .client
            .get(self.config.url("/api/tags"))
            .send()
            .await
            .map_err(LlmError::Transport)?;

        check_status(resp).await?;
        Ok(())
    }

    /// List models installed on the backend.
    pub async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let resp = self
            .client
            .get(self.config.url("/api/tags"))
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let tags: TagsResponse = decode(check_status(resp).await?).await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}

/// Turn a non-2xx response into [`LlmError::RequestFailed`] carrying the body text.
async fn check_status(resp: Response) -> Result<Response, LlmError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!(status = status.as_u16(), error = %e, "Failed to read error body");
            String::new()
        }
    };
    Err(LlmError::RequestFailed { status, body })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, LlmError> {
    let bytes = resp.bytes().await.map_err(LlmError::Transport)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection refused, DNS failure, timeout, or a broken body stream.
    #[error("failed to reach inference backend: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("inference request failed with status {status}: {body}")]
    RequestFailed { status: StatusCode, body: String },

    /// The backend answered 2xx with a body that does not match the API shape.
    #[error("failed to decode inference response: {0}")]
    Decode(#[from] serde_json::Error),
}
