//! Inference backend commands.

use anyhow::Context;

use crate::config::Settings;
use crate::llm::LlmClient;

/// Probe the backend and fail if it does not answer.
pub async fn cmd_health(settings: &Settings) -> anyhow::Result<()> {
    let client = LlmClient::new(settings.llm.clone())?;
    client
        .health_check()
        .await
        .with_context(|| format!("Ollama at {} is unhealthy", settings.llm.endpoint))?;

    println!("Ollama at {} is healthy", settings.llm.endpoint);
    Ok(())
}

/// Print installed models, marking the one used for email operations.
pub async fn cmd_models(settings: &Settings) -> anyhow::Result<()> {
    let client = LlmClient::new(settings.llm.clone())?;
    let models = client
        .list_models()
        .await
        .with_context(|| format!("failed to list models at {}", settings.llm.endpoint))?;

    if models.is_empty() {
        println!("No models installed at {}", settings.llm.endpoint);
        return Ok(());
    }

    for model in &models {
        let marker = if *model == settings.llm.model { "*" } else { " " };
        println!("{} {}", marker, model);
    }

    if !models.contains(&settings.llm.model) {
        eprintln!(
            "Configured model {} is not installed (try `ollama pull {}`)",
            settings.llm.model, settings.llm.model
        );
    }
    Ok(())
}
