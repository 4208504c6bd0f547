//! Client configuration.
//!
//! Provides the settings a root [`RequestBuilder`](crate::RequestBuilder) is
//! created from. Chain steps copy these settings; nothing mutates them after
//! construction.

use serde::{Deserialize, Deserializer};
use std::time::Duration;

use crate::error::Error;

/// Default base URI of the API.
pub const DEFAULT_BASE_URI: &str = "https://services.skybet.com";

/// Default path prefix of the sports API.
pub const DEFAULT_SPORT_API_PATH: &str = "/sportsapi/v2";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Query parameter that authenticates every request.
pub const AUTH_PARAM: &str = "api_user";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URI of the API (e.g., "https://services.skybet.com").
    pub base_uri: String,

    /// Path prefix of the sports API (e.g., "/sportsapi/v2").
    pub sport_api_path: String,

    /// Connect and request timeout. Zero disables the timeout.
    #[serde(rename = "timeout_secs", deserialize_with = "duration_from_secs")]
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_string(),
            sport_api_path: DEFAULT_SPORT_API_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("skybet-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given base URI.
    #[must_use]
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            ..Default::default()
        }
    }

    /// Sets the base URI.
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Sets the sports API path prefix.
    #[must_use]
    pub fn with_sport_api_path(mut self, path: impl Into<String>) -> Self {
        self.sport_api_path = path.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn validate(&self) -> Result<(), Error> {
        if self.base_uri.is_empty() {
            return Err(Error::Config("base_uri cannot be empty".to_string()));
        }

        if !self.base_uri.starts_with("http://") && !self.base_uri.starts_with("https://") {
            return Err(Error::Config(
                "base_uri must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

fn duration_from_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_secs)
}
