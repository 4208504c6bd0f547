//! Configuration module for loading and parsing TOML configuration files.

use serde::Deserialize;
use skybet_client::{AUTH_PARAM, ClientConfig, ParamValue, QueryParams, RequestBuilder};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
    /// The client rejected the configuration.
    #[error("client error: {0}")]
    Client(#[from] skybet_client::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP client configuration.
    pub client: ClientConfig,
    /// Query parameters sent with every request.
    pub params: QueryParams,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    /// Returns error if the client settings are invalid or `api_user` is
    /// missing or empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.client.validate()?;

        match self.params.get(AUTH_PARAM) {
            None => Err(ConfigError::InvalidValue(format!(
                "params.{} must be configured",
                AUTH_PARAM
            ))),
            Some(ParamValue::Single(user)) if user.is_empty() => Err(ConfigError::InvalidValue(
                format!("params.{} cannot be empty", AUTH_PARAM),
            )),
            Some(ParamValue::Many(_)) => Err(ConfigError::InvalidValue(format!(
                "params.{} must be a single value",
                AUTH_PARAM
            ))),
            Some(_) => Ok(()),
        }
    }

    /// Creates the root request builder described by this configuration.
    ///
    /// # Errors
    /// Returns error if the builder cannot be created.
    pub fn root_builder(&self) -> Result<RequestBuilder, ConfigError> {
        Ok(RequestBuilder::create(
            self.client.clone(),
            self.params.clone(),
            None,
        )?)
    }
}
