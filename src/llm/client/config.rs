//! LLM client configuration.

use std::time::Duration;

/// Configuration for the inference backend client.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// API endpoint of the Ollama server
    pub endpoint: String,
    /// Model used by the email operations
    pub model: String,
    /// Deadline applied to every outbound request
    pub timeout: Duration,
    /// Temperature for generation (0.0 - 1.0)
    pub temperature: f32,
    /// Nucleus sampling probability
    pub top_p: f32,
    /// Maximum tokens in response
    pub max_tokens: u32,
}

fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "mistral:7b-instruct".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    0.9
}

fn default_max_tokens() -> u32 {
    500
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout: default_timeout(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl LlmConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `LLM_ENDPOINT`: Ollama API endpoint
    /// - `LLM_MODEL`: Model name
    /// - `LLM_TEMPERATURE`: Generation temperature (0.0-1.0)
    /// - `LLM_MAX_TOKENS`: Maximum tokens in response
    ///
    /// Unparseable numeric values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("LLM_ENDPOINT") {
            if !val.is_empty() {
                self.endpoint = val;
            }
        }
        if let Ok(val) = std::env::var("LLM_MODEL") {
            if !val.is_empty() {
                self.model = val;
            }
        }
        if let Ok(val) = std::env::var("LLM_TEMPERATURE") {
            if let Ok(t) = val.parse() {
                self.temperature = t;
            }
        }
        if let Ok(val) = std::env::var("LLM_MAX_TOKENS") {
            if let Ok(n) = val.parse() {
                self.max_tokens = n;
            }
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a full URL for an API path such as `/api/generate`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.model, "mistral:7b-instruct");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_p, 0.9);
        assert_eq!(config.max_tokens, 500);
    }

    #[test]
    fn test_with_endpoint_strips_trailing_slash() {
        let config = LlmConfig::default().with_endpoint("http://gpu-box:11434/");
        assert_eq!(config.url("/api/tags"), "http://gpu-box:11434/api/tags");
    }
}
