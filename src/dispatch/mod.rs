//! Outbound repository-dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Validated download URL
//!     → payload.rs (event type + client payload with UTC timestamp)
//!     → client.rs (POST /repos/{owner}/{repo}/dispatches, interpret outcome)
//!     → Result<(), DispatchError> back to the handler
//! ```

pub mod client;
pub mod payload;

pub use client::{DispatchClient, DispatchError};
pub use payload::{ClientPayload, DispatchEvent, EVENT_TYPE};
