// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the Pi-hole local DNS client.
//!
//! This module provides specialized error types for:
//! - Records that violate the appliance's line grammar
//! - Lookups that find no matching domain
//! - Requests rejected by the appliance (one variant per record collection)
//! - Failures of the underlying HTTP transport
//!
//! Callers can match on [`ClientError`] structurally instead of inspecting
//! error strings.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::records::RecordKind;

/// Structured error returned by the appliance in its error envelope.
///
/// ```json
/// {"error": {"key": "bad_request", "message": "duplicate", "hint": null}}
/// ```
///
/// `key` and `message` are empty when the appliance omitted them; they are
/// never filled in by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code of the rejected request
    pub status_code: u16,
    /// Appliance-defined error category (may be empty)
    pub key: String,
    /// Human-readable error message (may be empty)
    pub message: String,
    /// Opaque hint payload, `None` when absent or `null`
    pub hint: Option<Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "({}): {}", self.status_code, self.message)
        } else {
            write!(f, "({} {}): {}", self.status_code, self.key, self.message)
        }
    }
}

/// Errors raised by the HTTP transport before a status code is available.
///
/// These are propagated through [`ClientError::Transport`] unchanged.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// The request URL could not be built from the base URL and path
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse
        url: String,
        /// Parser error
        reason: String,
    },

    /// HTTP connection failed (network unreachable, connection refused, TLS)
    #[error("HTTP connection to {url} failed: {reason}")]
    HttpConnectionFailed {
        /// The URL that couldn't be reached
        url: String,
        /// Reason for the connection failure
        reason: String,
    },

    /// HTTP request exceeded the configured timeout
    #[error("HTTP request to {url} timed out after {timeout_ms}ms")]
    HttpRequestTimeout {
        /// The URL that timed out
        url: String,
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// The response arrived but its body could not be read
    #[error("Failed to read response body from {url}: {reason}")]
    ResponseBodyUnreadable {
        /// The URL whose response body failed
        url: String,
        /// Reason for the failure
        reason: String,
    },
}

/// Composite error type returned by every record operation.
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    /// A line or tuple from the appliance violates the record grammar.
    ///
    /// Fatal to the enclosing list operation: no partial collections are returned.
    #[error("invalid {kind} {raw:?}: {reason}")]
    MalformedRecord {
        /// Which collection the line came from
        kind: RecordKind,
        /// The offending line as received
        raw: String,
        /// What is wrong with it
        reason: String,
    },

    /// No record in the collection matches the requested domain.
    #[error("local {kind} not found: {domain}")]
    NotFound {
        /// Which collection was searched
        kind: RecordKind,
        /// The requested domain
        domain: String,
    },

    /// The appliance rejected a local DNS (host) request with an error envelope
    #[error("pi-hole DNS API error {0}")]
    DnsApi(ApiError),

    /// The appliance rejected a local CNAME request with an error envelope
    #[error("pi-hole CNAME API error {0}")]
    CnameApi(ApiError),

    /// Non-success status without a decodable error envelope
    #[error("received unexpected status code {status_code} {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        body: String,
    },

    /// The list response is not the expected configuration envelope
    #[error("failed to parse {kind} list body: {reason}")]
    InvalidListBody {
        /// Which collection was listed
        kind: RecordKind,
        /// Decoder error
        reason: String,
    },

    /// Failure reported by the transport, never reinterpreted
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// Returns true if this is a lookup miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the structured appliance error, regardless of record kind.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::DnsApi(err) | Self::CnameApi(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the HTTP status code for errors that carry one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::DnsApi(err) | Self::CnameApi(err) => Some(err.status_code),
            Self::UnexpectedStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns a stable reason code for this error.
    ///
    /// Useful as a structured log field or a status condition reason.
    #[must_use]
    pub fn status_reason(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "MalformedRecord",
            Self::NotFound { .. } => "RecordNotFound",
            Self::DnsApi(_) => "DnsApiError",
            Self::CnameApi(_) => "CnameApiError",
            Self::UnexpectedStatus { .. } => "UnexpectedHttpResponse",
            Self::InvalidListBody { .. } => "InvalidListBody",
            Self::Transport(TransportError::InvalidUrl { .. }) => "InvalidUrl",
            Self::Transport(TransportError::HttpConnectionFailed { .. }) => "HttpConnectionFailed",
            Self::Transport(TransportError::HttpRequestTimeout { .. }) => "HttpRequestTimeout",
            Self::Transport(TransportError::ResponseBodyUnreadable { .. }) => {
                "ResponseBodyUnreadable"
            }
        }
    }
}
