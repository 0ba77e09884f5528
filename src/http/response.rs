//! Response envelopes and error taxonomy.
//!
//! # Responsibilities
//! - Define the JSON bodies the relay can answer with
//! - Map each failure class onto its HTTP status
//!
//! # Design Decisions
//! - Client input errors (400) carry a bare message; server-side failures
//!   (500) carry a generic "Server error" envelope with the detail string
//! - Upstream rejections and transport failures are deliberately collapsed
//!   into the same 500 envelope; callers cannot tell them apart
//! - Diagnostic detail beyond the summarized message is logged, not
//!   returned

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::dispatch::DispatchError;

/// Everything that can go wrong while relaying one request.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing download URL")]
    MissingUrl,

    #[error("Invalid download URL")]
    InvalidUrl,

    #[error("Missing required environment variables")]
    Misconfigured,

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// 400 body for client input errors.
#[derive(Debug, Serialize)]
pub struct ClientMessage {
    pub message: &'static str,
}

/// 500 body for configuration and dispatch failures.
#[derive(Debug, Serialize)]
pub struct ServerError {
    pub success: bool,
    pub message: &'static str,
    pub error: String,
}

impl ServerError {
    fn new(detail: String) -> Self {
        Self {
            success: false,
            message: "Server error",
            error: detail,
        }
    }
}

/// 200 body for an accepted relay.
#[derive(Debug, Serialize)]
pub struct RelayReceipt {
    pub success: bool,
    pub message: &'static str,
    pub url: String,
}

impl RelayReceipt {
    pub fn triggered(url: String) -> Self {
        Self {
            success: true,
            message: "Workflow triggered successfully",
            url,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::MissingUrl => (
                StatusCode::BAD_REQUEST,
                Json(ClientMessage {
                    message: "Missing download URL",
                }),
            )
                .into_response(),
            RelayError::InvalidUrl => (
                StatusCode::BAD_REQUEST,
                Json(ClientMessage {
                    message: "Invalid download URL",
                }),
            )
                .into_response(),
            RelayError::Misconfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerError::new(
                    "Missing required environment variables".to_string(),
                )),
            )
                .into_response(),
            RelayError::Dispatch(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerError::new(e.to_string())),
            )
                .into_response(),
        }
    }
}
