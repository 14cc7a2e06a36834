//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientConfig;

/// Environment variable overriding the node URL.
pub const NODE_URL_ENV_VAR: &str = "PLAZA_NODE_URL";

/// Environment variable overriding the chain id.
pub const CHAIN_ID_ENV_VAR: &str = "PLAZA_CHAIN_ID";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Load and validate configuration from a TOML file. Environment overrides
/// are applied after parsing, before validation.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: ClientConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Build a configuration from defaults plus environment overrides.
pub fn from_env() -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut ClientConfig) {
    if let Ok(url) = std::env::var(NODE_URL_ENV_VAR) {
        config.node_url = url;
    }
    if let Ok(chain_id) = std::env::var(CHAIN_ID_ENV_VAR) {
        config.chain_id = chain_id;
    }
}

/// Semantic checks beyond what serde enforces.
pub fn validate_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.chain_id.is_empty() {
        return Err(ConfigError::Validation(
            "chain_id must not be empty".to_string(),
        ));
    }
    if config.rpc_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "rpc_timeout_secs must be greater than zero".to_string(),
        ));
    }
    if config.broadcast_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "broadcast_timeout_secs must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_chain_id() {
        let config = ClientConfig {
            chain_id: String::new(),
            ..ClientConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("chain_id"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig {
            rpc_timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }
}
