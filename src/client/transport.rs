// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP transport for the appliance API.
//!
//! The record layer only needs `request(method, path, body) -> (status, body)`.
//! [`Transport`] captures that contract; [`HttpTransport`] implements it with
//! `reqwest`, injecting the configured credentials on every call.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Method, Url};
use tracing::{debug, warn};

use crate::config::{ClientConfig, ConfigError, Credentials};
use crate::constants::{API_KEY_HEADER, SESSION_ID_HEADER};
use crate::errors::TransportError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Build a response from a status code and raw body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single request/response exchange with the appliance.
///
/// Implementations own connection handling, timeouts and authentication
/// headers. They never retry and never interpret non-2xx statuses; those are
/// returned as ordinary responses.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `method` to `path` (already percent-escaped) with an optional body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] only when no HTTP status could be obtained.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<TransportResponse, TransportError>;
}

/// Build the API base URL from a server address
///
/// Converts "pi.hole:8080" to `<http://pi.hole:8080>` and strips trailing
/// slashes; addresses that already carry a scheme are kept as is.
pub(crate) fn build_api_url(server: &str) -> String {
    let server = server.trim().trim_end_matches('/');
    if server.contains("://") {
        server.to_string()
    } else {
        format!("http://{server}")
    }
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client for API requests
    client: Arc<HttpClient>,
    /// Normalized base URL without trailing slash
    base_url: Arc<String>,
    credentials: Credentials,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let client = HttpClient::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client: Arc::new(client),
            base_url: Arc::new(build_api_url(&config.base_url)),
            credentials: config.credentials(),
            timeout: config.request_timeout(),
        })
    }

    /// Normalized base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and an escaped path without re-encoding the path.
    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        Url::parse(&url).map_err(|e| TransportError::InvalidUrl {
            url,
            reason: e.to_string(),
        })
    }

    fn send_error(&self, url: &Url, err: &reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::HttpRequestTimeout {
                url: url.to_string(),
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            TransportError::HttpConnectionFailed {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<TransportResponse, TransportError> {
        let url = self.url_for(path)?;

        debug!(
            method = %method,
            url = %url,
            auth_enabled = self.credentials != Credentials::None,
            "HTTP API request to pi-hole"
        );

        let mut request = self.client.request(method.clone(), url.clone());

        // Add the auth header only when credentials are configured
        request = match &self.credentials {
            Credentials::ApiKey(token) => request.header(API_KEY_HEADER, token),
            Credentials::Session(sid) => request.header(SESSION_ID_HEADER, sid),
            Credentials::None => request,
        };

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.send_error(&url, &e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::ResponseBodyUnreadable {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if status.is_success() {
            debug!(
                method = %method,
                url = %url,
                status = %status,
                response_len = body.len(),
                "HTTP API request successful"
            );
        } else {
            warn!(
                method = %method,
                url = %url,
                status = %status,
                response_len = body.len(),
                "HTTP API request returned non-success status"
            );
        }

        Ok(TransportResponse::new(status.as_u16(), body.to_vec()))
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod transport_tests;
