// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for http_errors module
//!
//! These tests verify classification of non-success responses.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::errors::ClientError;
    use crate::http_errors::*;
    use crate::records::RecordKind;

    // ============================================================================
    // Structured Envelope
    // ============================================================================

    #[test]
    fn test_envelope_yields_dns_api_error() {
        let body = br#"{"error":{"key":"bad_request","message":"duplicate","hint":null}}"#;
        match classify_error_response(RecordKind::LocalDns, 400, body) {
            ClientError::DnsApi(api) => {
                assert_eq!(api.status_code, 400);
                assert_eq!(api.key, "bad_request");
                assert_eq!(api.message, "duplicate");
                assert_eq!(api.hint, None);
            }
            other => panic!("expected DnsApi, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_yields_cname_api_error() {
        let body = br#"{"error":{"key":"not_found","message":"missing","hint":null}}"#;
        assert!(matches!(
            classify_error_response(RecordKind::LocalCname, 404, body),
            ClientError::CnameApi(_)
        ));
    }

    #[test]
    fn test_envelope_hint_is_kept_opaque() {
        let body = br#"{"error":{"key":"bad_request","message":"invalid","hint":{"field":"domain"}}}"#;
        let err = classify_error_response(RecordKind::LocalDns, 400, body);
        assert_eq!(
            err.api_error().and_then(|api| api.hint.clone()),
            Some(json!({"field": "domain"}))
        );
    }

    #[test]
    fn test_envelope_missing_fields_stay_empty() {
        let err = classify_error_response(RecordKind::LocalDns, 403, br#"{"error":{}}"#);
        let api = err.api_error().unwrap();
        assert_eq!(api.key, "");
        assert_eq!(api.message, "");
        assert_eq!(api.hint, None);
    }

    // ============================================================================
    // Generic Fallback
    // ============================================================================

    #[test]
    fn test_empty_body_is_status_only() {
        match classify_error_response(RecordKind::LocalDns, 500, b"") {
            ClientError::UnexpectedStatus { status_code, body } => {
                assert_eq!(status_code, 500);
                assert!(body.is_empty());
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_body_keeps_raw_text() {
        match classify_error_response(RecordKind::LocalCname, 502, b"<html>Bad Gateway</html>") {
            ClientError::UnexpectedStatus { status_code, body } => {
                assert_eq!(status_code, 502);
                assert_eq!(body, "<html>Bad Gateway</html>");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_error_object_is_status_only() {
        for body in [&br#"{}"#[..], br#"{"error":null}"#, br#"{"message":"x"}"#] {
            let err = classify_error_response(RecordKind::LocalDns, 400, body);
            assert!(
                matches!(err, ClientError::UnexpectedStatus { .. }),
                "body {:?} should not produce an API error",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_error_object_of_wrong_type_is_status_only() {
        let err = classify_error_response(RecordKind::LocalDns, 400, br#"{"error":"nope"}"#);
        assert!(err.api_error().is_none());
        assert_eq!(err.status_code(), Some(400));
    }
}
