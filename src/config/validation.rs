//! Configuration validation.
//!
//! Semantic validation on top of serde's syntactic checks. Returns all
//! validation errors, not just the first, so a broken deployment can be
//! fixed in one pass.
//!
//! Missing GitHub credentials are deliberately NOT a validation error: the
//! relay starts without them and reports a server error per request until
//! the deployment supplies them.

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic configuration error.
#[derive(Debug)]
pub enum ValidationError {
    InvalidBindAddress(String),
    ZeroRequestTimeout,
    InvalidApiBase(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address '{}' is not a socket address", addr)
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "timeouts.request_secs must be greater than zero")
            }
            ValidationError::InvalidApiBase(base) => {
                write!(f, "github.api_base '{}' is not a valid URL", base)
            }
        }
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if Url::parse(&config.github.api_base).is_err() {
        errors.push(ValidationError::InvalidApiBase(config.github.api_base.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.timeouts.request_secs = 0;
        config.github.api_base = "::nope::".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn missing_credentials_are_not_a_validation_error() {
        let config = RelayConfig::default();
        assert!(config.github.token.is_empty());
        assert!(validate_config(&config).is_ok());
    }
}
