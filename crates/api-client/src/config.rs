//! Configuration for the SecurityTrails API client
//!
//! A [`ClientConfig`] is owned by exactly one client. It can be built in
//! code, loaded from environment variables, or deserialized from whatever
//! file format the embedding application uses.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_HOST: &str = "https://api.securitytrails.com/v1";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "SECURITYTRAILS_API_KEY";

/// Environment variable overriding the base URL
pub const ENV_API_URL: &str = "SECURITYTRAILS_API_URL";

/// Environment variable holding a request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "SECURITYTRAILS_TIMEOUT_SECS";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent as the `APIKEY` header; omitted from requests when unset
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL every request path is appended to
    #[serde(default = "default_host")]
    pub host: String,
    /// Request timeout handed to the HTTP transport; `None` keeps its default
    #[serde(default, with = "optional_secs")]
    pub timeout: Option<Duration>,
    /// `User-Agent` header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_user_agent() -> String {
    concat!("securitytrails-api-client/", env!("CARGO_PKG_VERSION")).to_string()
}

mod optional_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        duration: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            host: default_host(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Configuration for the default host with the given key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `SECURITYTRAILS_API_KEY`: API key (optional; the service rejects
    ///   unauthenticated calls itself)
    /// - `SECURITYTRAILS_API_URL`: Base URL (defaults to the public API)
    /// - `SECURITYTRAILS_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let api_key = env::var(ENV_API_KEY).ok().filter(|k| !k.is_empty());
        let host = env::var(ENV_API_URL).unwrap_or_else(|_| default_host());

        let timeout = match env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    ApiError::config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            host,
            timeout,
            user_agent: default_user_agent(),
        })
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Builder-style method to set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builder-style method to set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Base URL with any trailing `/` removed
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.host.trim_end_matches('/')
    }

    /// Validate the configuration
    ///
    /// The key's format is not checked; the service is the authority on that.
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url().is_empty() {
            return Err(ApiError::config("host cannot be empty"));
        }

        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(ApiError::config("host must start with http:// or https://"));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
