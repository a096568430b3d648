//! # techblogd — techblog host daemon
//!
//! Composition root that serves the compiled browser client.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing`
//! - Load the client shell and inject the API base URL
//! - Build the axum router, bind to a TCP port, and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the wiring layer — no routing or rendering logic belongs here.

mod config;

use techblog_adapter_http_axum::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let client = config.client_config()?;
    let state = AppState::load(config.assets_dir(), &client)?;
    let app = techblog_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(
        %bind_addr,
        assets = config.assets_dir(),
        api = client.api_base_url(),
        "techblogd listening"
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("techblogd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
