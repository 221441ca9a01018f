//! HTTP server for the InboxAI API.
//!
//! Exposes the LLM gateway (Ollama health and a summarize/classify test
//! endpoint) alongside placeholder mailbox endpoints, and owns the process
//! lifecycle: bind, serve on a background task, drain on shutdown.

mod handlers;
mod middleware;
mod routes;

pub use handlers::{ApiError, TestRequest, TestResponse, SAMPLE_TEXT};
pub use middleware::{ALLOWED_HEADERS, ALLOWED_METHODS, ALLOWED_ORIGIN};
pub use routes::create_router;

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::llm::{LlmClient, LlmConfig, LlmError};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}

impl AppState {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        Ok(Self {
            llm: LlmClient::new(config.clone())?,
        })
    }
}

/// How the server stopped after a shutdown signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// All in-flight requests finished within the grace period.
    Graceful,
    /// The grace period elapsed; remaining connections were dropped.
    DeadlineExceeded,
}

/// Start the web server and run until an interrupt signal.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let state = AppState::new(&settings.llm)?;
    let app = create_router(state, &settings.server);

    let addr = settings.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("API listening on {}", listener.local_addr()?);
    info!(
        llm_endpoint = %settings.llm.endpoint,
        model = %settings.llm.model,
        read_timeout = ?settings.server.read_timeout,
        write_timeout = ?settings.server.write_timeout,
        idle_timeout = ?settings.server.idle_timeout,
        "Server configured"
    );

    match run_until_shutdown(
        listener,
        app,
        shutdown_signal(),
        settings.server.shutdown_timeout,
    )
    .await?
    {
        ShutdownOutcome::Graceful => info!("bye"),
        ShutdownOutcome::DeadlineExceeded => warn!(
            "graceful shutdown did not finish within {:?}, exiting anyway",
            settings.server.shutdown_timeout
        ),
    }
    Ok(())
}

/// Serve `app` on a background task until `signal` resolves, then stop
/// accepting connections and give in-flight requests `grace` to finish.
pub async fn run_until_shutdown<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> anyhow::Result<ShutdownOutcome>
where
    F: Future<Output = ()>,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            // The server stopped on its own before any signal.
            result.context("server task panicked")??;
            return Ok(ShutdownOutcome::Graceful);
        }
        _ = signal => {}
    }

    info!("shutting down...");
    let _ = stop_tx.send(());

    match tokio::time::timeout(grace, &mut server).await {
        Ok(Ok(Ok(()))) => Ok(ShutdownOutcome::Graceful),
        Ok(Ok(Err(e))) => {
            error!(error = %e, "server error during shutdown");
            Ok(ShutdownOutcome::Graceful)
        }
        Ok(Err(e)) => {
            error!(error = %e, "server task failed during shutdown");
            Ok(ShutdownOutcome::Graceful)
        }
        Err(_) => {
            server.abort();
            Ok(ShutdownOutcome::DeadlineExceeded)
        }
    }
}

/// Resolve on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
