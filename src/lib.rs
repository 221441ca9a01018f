//! inboxai - API server for an email-intelligence product.
//!
//! Core library: the Ollama LLM gateway, the HTTP server exposing it, and the CLI.

pub mod cli;
pub mod config;
pub mod llm;
pub mod server;

#[cfg(test)]
mod test_support;
