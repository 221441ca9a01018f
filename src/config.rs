//! Configuration for the InboxAI API, assembled from the environment.

use std::time::Duration;

use crate::llm::LlmConfig;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3001;

/// Default listen host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Deadline for receiving a request body.
    pub read_timeout: Duration,
    /// Deadline for producing a response. Sized to exceed the LLM client timeout.
    pub write_timeout: Duration,
    /// Keep-alive idle allowance, slightly longer than the write timeout.
    pub idle_timeout: Duration,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            read_timeout: Duration::from_secs(15),
            write_timeout: Duration::from_secs(5 * 60),
            idle_timeout: Duration::from_secs(6 * 60),
            shutdown_timeout: Duration::from_secs(10),
        }
    }
}

impl ServerConfig {
    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `HOST`: listen host
    /// - `PORT`: listen port
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("HOST") {
            if !val.is_empty() {
                self.host = val;
            }
        }
        if let Ok(val) = std::env::var("PORT") {
            if let Ok(port) = val.parse() {
                self.port = port;
            }
        }
        self
    }

    /// Socket address string in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Top-level settings.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

impl Settings {
    /// Load settings from the process environment (after `.env` has been applied).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::default().with_env_overrides(),
            llm: LlmConfig::from_env(),
        }
    }
}
