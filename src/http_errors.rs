// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP error response classification.
//!
//! The appliance reports failures either with a structured envelope or with an
//! arbitrary body. This module turns a non-success status and body into a
//! [`ClientError`] for the record collection that issued the request.
//!
//! # Usage
//!
//! ```rust
//! use pihole_localdns::http_errors::classify_error_response;
//! use pihole_localdns::records::RecordKind;
//!
//! let body = br#"{"error":{"key":"bad_request","message":"duplicate","hint":null}}"#;
//! let err = classify_error_response(RecordKind::LocalDns, 400, body);
//! let api = err.api_error().unwrap();
//! assert_eq!(api.key, "bad_request");
//!
//! let err = classify_error_response(RecordKind::LocalCname, 502, b"");
//! assert!(err.api_error().is_none());
//! assert_eq!(err.status_code(), Some(502));
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ApiError, ClientError};
use crate::records::RecordKind;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetails>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    #[serde(default)]
    key: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    hint: Option<Value>,
}

/// Decode the `{"error": {...}}` envelope.
///
/// Returns `None` for an empty body, a body that is not JSON, or JSON without
/// an `error` object.
fn parse_error_envelope(body: &[u8]) -> Option<ErrorDetails> {
    if body.is_empty() {
        return None;
    }

    serde_json::from_slice::<ErrorEnvelope>(body).ok()?.error
}

/// Map a non-success response to an error for the given record collection.
///
/// # Classification
///
/// | Body | Result |
/// |------|--------|
/// | `{"error": {...}}` from a host request | [`ClientError::DnsApi`] |
/// | `{"error": {...}}` from a CNAME request | [`ClientError::CnameApi`] |
/// | empty, not JSON, or no `error` object | [`ClientError::UnexpectedStatus`] |
#[must_use]
pub fn classify_error_response(kind: RecordKind, status_code: u16, body: &[u8]) -> ClientError {
    let Some(details) = parse_error_envelope(body) else {
        return ClientError::UnexpectedStatus {
            status_code,
            body: String::from_utf8_lossy(body).into_owned(),
        };
    };

    let api_error = ApiError {
        status_code,
        key: details.key,
        message: details.message,
        hint: details.hint,
    };

    match kind {
        RecordKind::LocalDns => ClientError::DnsApi(api_error),
        RecordKind::LocalCname => ClientError::CnameApi(api_error),
    }
}
