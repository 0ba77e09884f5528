//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, relay handler)
//!     → request.rs (add request ID, decode path into candidate URL)
//!     → [dispatch client issues the outbound POST]
//!     → response.rs (JSON envelope, status mapping)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{decode_target, MakeRelayRequestId, X_REQUEST_ID};
pub use response::RelayError;
pub use server::HttpServer;
