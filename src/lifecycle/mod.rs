//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init logging → Bind listener → Serve
//!
//! Shutdown (signals.rs):
//!     SIGTERM/SIGINT → axum graceful shutdown → drain → exit
//! ```
//!
//! In-flight outbound dispatch calls run to completion during the drain;
//! there is no cancellation path.

pub mod signals;

pub use signals::shutdown_signal;
