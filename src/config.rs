// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Client configuration.
//!
//! [`ClientConfig`] can be built in code, deserialized with serde from any
//! format the embedding application uses, or read from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `PIHOLE_URL` | `base_url` |
//! | `PIHOLE_API_TOKEN` | `api_token` |
//! | `PIHOLE_SESSION_ID` | `session_id` |
//! | `PIHOLE_REQUEST_TIMEOUT_SECS` | `request_timeout_secs` |

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT, ENV_PIHOLE_API_TOKEN,
    ENV_PIHOLE_REQUEST_TIMEOUT_SECS, ENV_PIHOLE_SESSION_ID, ENV_PIHOLE_URL,
};

/// Errors raised while building a client from configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// A required setting is absent
    #[error("missing required setting '{name}'")]
    Missing {
        /// Setting or environment variable name
        name: &'static str,
    },

    /// A setting is present but unusable
    #[error("invalid setting '{name}': {reason}")]
    Invalid {
        /// Setting or environment variable name
        name: &'static str,
        /// Explanation of what is invalid
        reason: String,
    },

    /// The underlying HTTP client could not be constructed
    #[error("failed to build HTTP client: {reason}")]
    HttpClient {
        /// Builder error
        reason: String,
    },
}

/// Credentials sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No authentication header
    None,
    /// API key sent as `X-FTL-APIKEY`
    ApiKey(String),
    /// Session ID sent as `X-FTL-SID`
    Session(String),
}

/// Connection settings for the appliance API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL, e.g. `http://pi.hole` or `pi.hole:8080`
    pub base_url: String,
    /// API key; takes precedence over `session_id`
    pub api_token: Option<String>,
    /// Already negotiated session ID
    pub session_id: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_token: None,
            session_id: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration with defaults for everything but the base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Use an API key for authentication.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Use an existing session ID for authentication.
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_secs = timeout.as_secs();
        self
    }

    /// Read configuration from `PIHOLE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PIHOLE_URL` is unset, the timeout is not a number,
    /// or the result fails [`Self::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_url = non_empty(ENV_PIHOLE_URL).ok_or(ConfigError::Missing {
            name: ENV_PIHOLE_URL,
        })?;

        let mut config = Self::new(base_url);
        config.api_token = non_empty(ENV_PIHOLE_API_TOKEN);
        config.session_id = non_empty(ENV_PIHOLE_SESSION_ID);

        if let Some(timeout) = non_empty(ENV_PIHOLE_REQUEST_TIMEOUT_SECS) {
            config.request_timeout_secs = timeout.trim().parse::<u64>().map_err(|e| {
                ConfigError::Invalid {
                    name: ENV_PIHOLE_REQUEST_TIMEOUT_SECS,
                    reason: e.to_string(),
                }
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration before a transport is built from it.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty or non-HTTP base URL, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Missing { name: "base_url" });
        }

        let url = url::Url::parse(&crate::client::transport::build_api_url(&self.base_url))
            .map_err(|e| ConfigError::Invalid {
                name: "base_url",
                reason: e.to_string(),
            })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: "base_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Credentials to send; an API key wins over a session ID.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        let present = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        if let Some(token) = present(&self.api_token) {
            Credentials::ApiKey(token)
        } else if let Some(sid) = present(&self.session_id) {
            Credentials::Session(sid)
        } else {
            Credentials::None
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
