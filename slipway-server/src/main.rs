use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;

use anyhow::Context;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use slipway_engine::docker::DockerCli;
use slipway_engine::git::GitCli;
use slipway_engine::{DeployConfig, Deployer};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "slipway_server=debug,slipway_engine=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Slipway deploy server...");

    let config_path =
        std::env::var("SLIPWAY_CONFIG").unwrap_or_else(|_| "config.json".to_string());
    let config = Config::load(&config_path)?;

    // Wire the engine to the real tools; the engine itself reads no ambient
    // state after this point.
    let deployer = Arc::new(Deployer::new(
        DeployConfig::default(),
        Arc::new(GitCli),
        Arc::new(DockerCli),
        Arc::new(DockerCli),
    ));

    // Build router with all API endpoints
    let app = api::create_router(deployer);

    let addr = format!("0.0.0.0:{}", config.http_port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

/// Completes when SIGINT or SIGTERM arrives
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
