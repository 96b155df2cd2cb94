//! Password Service Library
//!
//! This crate provides a single-endpoint HTTP API that returns a freshly
//! generated random password on every `GET /`.

pub mod config;
pub mod generator;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServiceConfig;
use crate::routes::create_router;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Build router
    let app = create_router().layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Password service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
