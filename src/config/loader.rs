//! Configuration loading from disk and the environment.
//!
//! The secrets identifying the dispatch target come from the hosting
//! environment's secret store, so environment variables always win over
//! file values.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "RELAY_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolve the effective configuration for this process.
///
/// Reads the file named by `RELAY_CONFIG` when set, otherwise starts from
/// defaults, then applies the environment overlay and validates.
pub fn load() -> Result<RelayConfig, ConfigError> {
    let mut config = match env::var(CONFIG_PATH_VAR) {
        Ok(path) => parse_file(Path::new(&path))?,
        Err(_) => RelayConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a specific TOML file, with the
/// environment overlay applied on top.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let mut config = parse_file(path)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_file(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Overlay environment-supplied values onto the file configuration.
fn apply_env_overrides(config: &mut RelayConfig) {
    if let Ok(token) = env::var("GITHUB_TOKEN") {
        config.github.token = token;
    }
    if let Ok(owner) = env::var("GITHUB_OWNER") {
        config.github.owner = owner;
    }
    if let Ok(repo) = env::var("GITHUB_REPO") {
        config.github.repo = repo;
    }
    if let Ok(bind) = env::var("RELAY_BIND") {
        config.listener.bind_address = bind;
    }
}
