//! HTTP server setup and the relay handler.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all relay route
//! - Wire up middleware (tracing, timeout, request ID, CORS header)
//! - Bind server to listener with graceful shutdown
//! - Decode and validate the inbound path
//! - Hand the validated URL to the dispatch client and map the outcome

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::schema::RelayConfig;
use crate::dispatch::DispatchClient;
use crate::http::request::{decode_target, MakeRelayRequestId, X_REQUEST_ID};
use crate::http::response::{RelayError, RelayReceipt};
use crate::lifecycle::signals::shutdown_signal;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub client: DispatchClient,
}

/// HTTP server for the dispatch relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState {
            config: Arc::new(config.clone()),
            client: DispatchClient::new(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    // Outermost so even middleware-generated responses
                    // carry the permissive CORS header.
                    .layer(SetResponseHeaderLayer::overriding(
                        header::ACCESS_CONTROL_ALLOW_ORIGIN,
                        HeaderValue::from_static("*"),
                    ))
                    .layer(SetRequestIdLayer::x_request_id(MakeRelayRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Main relay handler.
/// Decodes the path, validates the candidate URL, and triggers the dispatch.
async fn relay_handler(State(state): State<AppState>, request: Request) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let path = request.uri().path();

    // 1. Decode and validate the candidate URL
    let target = match decode_target(path) {
        Ok(target) => target,
        Err(reject) => {
            tracing::debug!(
                request_id = %request_id,
                path = %path,
                reason = %reject,
                "Rejected relay request"
            );
            return reject.into_response();
        }
    };

    // 2. The dispatch target must be fully configured
    let github = &state.config.github;
    if !github.is_complete() {
        tracing::error!(
            request_id = %request_id,
            missing = ?github.missing_values(),
            "GitHub dispatch target is not configured"
        );
        return RelayError::Misconfigured.into_response();
    }

    // 3. One outbound attempt, awaited to completion
    tracing::debug!(
        request_id = %request_id,
        url = %target,
        "Dispatching download trigger"
    );

    match state.client.trigger(github, &target).await {
        Ok(()) => (StatusCode::OK, Json(RelayReceipt::triggered(target))).into_response(),
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "Dispatch failed"
            );
            RelayError::Dispatch(e).into_response()
        }
    }
}
