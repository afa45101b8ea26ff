//! Bridge Server - HTTP front for relay-drone bridge planning

use anyhow::Result;
use bridge_server::{build_app, config::Config};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("bridge_server=debug".parse()?)
            .add_directive("bridge_core=info".parse()?))
        .init();

    tracing::info!("Starting Bridge Server...");

    let config = Config::from_env();
    tracing::info!(
        base_path = %config.base_api_path,
        max_spacing = config.max_spacing,
        step_size = config.step_size,
        idle_policy = ?config.idle_policy,
        "Loaded configuration"
    );
    let port = config.server_port;
    let app = build_app(config);

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
