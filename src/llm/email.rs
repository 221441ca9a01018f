//! Email operations built on text generation.

use tracing::{debug, warn};

use super::client::{LlmClient, LlmError};
use super::prompts::{EmailCategory, CLASSIFY_SYSTEM_PROMPT, SUMMARIZE_SYSTEM_PROMPT};

impl LlmClient {
    /// Summarize an email in 2-3 sentences. The model output is returned unmodified.
    pub async fn summarize_email(&self, email: &str) -> Result<String, LlmError> {
        debug!(len = email.len(), "Summarizing email");
        self.generate(&self.config().model, email, Some(SUMMARIZE_SYSTEM_PROMPT))
            .await
    }

    /// Classify an email into one of the [`EmailCategory`] labels.
    ///
    /// The label is returned exactly as the model produced it. Output outside
    /// the known set is logged but not rejected or rewritten.
    pub async fn classify_email(&self, email: &str) -> Result<String, LlmError> {
        debug!(len = email.len(), "Classifying email");
        let label = self
            .generate(&self.config().model, email, Some(CLASSIFY_SYSTEM_PROMPT))
            .await?;

        if EmailCategory::from_label(&label).is_none() {
            warn!(label = %label, "Classifier returned a label outside the known categories");
        }
        Ok(label)
    }
}
