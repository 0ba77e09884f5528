//! Workflow Dispatch Relay
//!
//! A single-endpoint HTTP relay built with Tokio and Axum. It accepts a
//! percent-encoded download URL as the request path, validates it, and
//! forwards it to the GitHub repository-dispatch API so an external
//! workflow can pick the download up.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │              DISPATCH RELAY                   │
//!                    │                                               │
//!   GET /<enc-url>   │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│ decode + │───▶│dispatch │──┼──▶ api.github.com
//!                    │  │ server  │    │ validate │    │ client  │  │    /repos/{o}/{r}/dispatches
//!                    │  └─────────┘    └──────────┘    └────┬────┘  │
//!                    │                                      │       │
//!   JSON envelope    │  ┌──────────┐                        │       │
//!   ◀────────────────┼──│ response │◀───────────────────────┘       │
//!                    │  │ envelope │                                │
//!                    │  └──────────┘                                │
//!                    │                                               │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │        Cross-Cutting Concerns           │  │
//!                    │  │  ┌────────┐ ┌───────────┐ ┌──────────┐ │  │
//!                    │  │  │ config │ │ observa-  │ │lifecycle │ │  │
//!                    │  │  │        │ │ bility    │ │          │ │  │
//!                    │  │  └────────┘ └───────────┘ └──────────┘ │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use dispatch_relay::config;
use dispatch_relay::http::HttpServer;
use dispatch_relay::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (optional TOML file + environment overlay)
    let config = config::load()?;

    logging::init(&config.observability);

    tracing::info!("dispatch-relay v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        api_base = %config.github.api_base,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Missing credentials are a request-time 500, not a startup failure;
    // the deployment may inject them after the process is already up.
    if !config.github.is_complete() {
        tracing::warn!(
            missing = ?config.github.missing_values(),
            "GitHub dispatch target incomplete; relay will answer 500 until configured"
        );
    }

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
