//! sims - Student Information Management System server
//!
//! Serves the record API, the LLM analysis proxy and the embedded browser
//! UI from one process backed by a single flat JSON file.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;

use sims::config::Args;
use sims::llm::ChatClient;
use sims::store::RecordStore;
use sims::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting sims v{}", env!("CARGO_PKG_VERSION"));
    info!("Data file: {}", args.data_file.display());

    let store = RecordStore::new(&args.data_file);

    let llm = match args.llm_api_key.as_deref() {
        Some(key) if !key.is_empty() => {
            info!("LLM analysis enabled (model: {})", args.llm_model);
            Some(ChatClient::new(
                args.llm_api_url.clone(),
                args.llm_model.clone(),
                key.to_string(),
            ))
        }
        _ => {
            info!("LLM API key not set; /llm/chat will report a configuration error");
            None
        }
    };

    let state = AppState::new(store, llm);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("sims listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        }
    }
}
