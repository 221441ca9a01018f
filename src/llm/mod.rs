//! LLM integration for email summarization and classification.
//!
//! Uses a local LLM (via Ollama) reached over HTTP.

mod client;
mod email;
mod prompts;

pub use client::{
    EmbeddingRequest, EmbeddingResponse, GenerateOptions, GenerateRequest, GenerateResponse,
    LlmClient, LlmConfig, LlmError,
};
pub use prompts::{EmailCategory, CLASSIFY_SYSTEM_PROMPT, SUMMARIZE_SYSTEM_PROMPT};
