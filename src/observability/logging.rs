//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Derive the default filter from configuration
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level, so operators can raise
//!   verbosity without touching config files

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::schema::ObservabilityConfig;

/// Initialize the global tracing subscriber.
///
/// Call once, before the first log line. Subsequent calls would panic, so
/// this lives at the top of `main`.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!(
        "dispatch_relay={level},tower_http={level}",
        level = config.log_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
