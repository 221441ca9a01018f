//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod llm;
mod serve;

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "inboxai")]
#[command(about = "InboxAI API server with a local LLM gateway")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Address to bind: PORT, HOST, or HOST:PORT (defaults to $HOST:$PORT)
    #[arg(short, long, global = true, env = "INBOXAI_BIND")]
    pub bind: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server (default)
    Serve,

    /// Check that the Ollama backend is reachable
    Health,

    /// List models installed on the Ollama backend
    Models,
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::cmd_serve(settings, cli.bind.as_deref()).await,
        Commands::Health => llm::cmd_health(&settings).await,
        Commands::Models => llm::cmd_models(&settings).await,
    }
}
