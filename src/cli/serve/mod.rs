//! Serve command - runs the JSON API and the event page on one port

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::router::create_router_with_ui;
use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Run the check-in server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config).await?;
    let app = create_router_with_ui(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting check-in server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
