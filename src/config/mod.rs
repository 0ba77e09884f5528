//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! RELAY_CONFIG file (optional, TOML)
//!     → schema.rs (serde deserialization, defaults)
//!     → loader.rs (environment overlay: secrets win over file values)
//!     → validation.rs (semantic checks, all errors collected)
//!     → RelayConfig handed to the HTTP server
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, load_config, ConfigError};
pub use schema::{GithubConfig, ListenerConfig, ObservabilityConfig, RelayConfig, TimeoutConfig};
