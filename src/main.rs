// Main entry point - Configuration, logging and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use clap::Parser;

use crate::infrastructure::config::load_config;
use crate::infrastructure::logging::init_tracing;
use crate::presentation::router::setup_router;

const SERVER_PORT: u16 = 8081;

#[derive(Parser, Debug)]
#[command(name = "instance-tiles", about = "Web front end rendering backend instance tiles")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "/config/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = load_config(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    init_tracing(&config.log_config)?;

    let router = setup_router(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], SERVER_PORT));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        environment = %config.environment,
        backend_url = %config.backend_url,
        "Starting instance-tiles frontend"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
