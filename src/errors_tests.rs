// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for client error types.

#[cfg(test)]
mod tests {
    use crate::errors::*;
    use crate::records::RecordKind;

    fn api_error(key: &str, message: &str) -> ApiError {
        ApiError {
            status_code: 400,
            key: key.to_string(),
            message: message.to_string(),
            hint: None,
        }
    }

    // ============================================================================
    // Display
    // ============================================================================

    #[test]
    fn test_dns_api_error_with_key() {
        let error = ClientError::DnsApi(api_error("bad_request", "duplicate"));
        assert_eq!(
            error.to_string(),
            "pi-hole DNS API error (400 bad_request): duplicate"
        );
    }

    #[test]
    fn test_cname_api_error_without_key() {
        let error = ClientError::CnameApi(api_error("", "duplicate"));
        assert_eq!(error.to_string(), "pi-hole CNAME API error (400): duplicate");
    }

    #[test]
    fn test_not_found_error() {
        let error = ClientError::NotFound {
            kind: RecordKind::LocalDns,
            domain: "nas.lan".to_string(),
        };
        assert_eq!(error.to_string(), "local DNS record not found: nas.lan");

        let error = ClientError::NotFound {
            kind: RecordKind::LocalCname,
            domain: "files.lan".to_string(),
        };
        assert_eq!(error.to_string(), "local CNAME record not found: files.lan");
    }

    #[test]
    fn test_unexpected_status_error() {
        let error = ClientError::UnexpectedStatus {
            status_code: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "received unexpected status code 502 Bad Gateway"
        );
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let error: ClientError = TransportError::HttpRequestTimeout {
            url: "http://pi.test/api/config/dns/hosts".to_string(),
            timeout_ms: 30000,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "HTTP request to http://pi.test/api/config/dns/hosts timed out after 30000ms"
        );
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    #[test]
    fn test_is_not_found() {
        let error = ClientError::NotFound {
            kind: RecordKind::LocalCname,
            domain: "a.lan".to_string(),
        };
        assert!(error.is_not_found());
        assert!(!ClientError::DnsApi(api_error("k", "m")).is_not_found());
    }

    #[test]
    fn test_api_error_accessor_covers_both_kinds() {
        let dns = ClientError::DnsApi(api_error("dns", "m"));
        let cname = ClientError::CnameApi(api_error("cname", "m"));
        assert_eq!(dns.api_error().map(|e| e.key.as_str()), Some("dns"));
        assert_eq!(cname.api_error().map(|e| e.key.as_str()), Some("cname"));

        let other = ClientError::UnexpectedStatus {
            status_code: 500,
            body: String::new(),
        };
        assert!(other.api_error().is_none());
    }

    #[test]
    fn test_status_code() {
        assert_eq!(
            ClientError::CnameApi(api_error("k", "m")).status_code(),
            Some(400)
        );
        assert_eq!(
            ClientError::UnexpectedStatus {
                status_code: 503,
                body: String::new()
            }
            .status_code(),
            Some(503)
        );
        assert_eq!(
            ClientError::MalformedRecord {
                kind: RecordKind::LocalDns,
                raw: "x".to_string(),
                reason: "y".to_string(),
            }
            .status_code(),
            None
        );
    }

    #[test]
    fn test_status_reason() {
        let cases = [
            (
                ClientError::MalformedRecord {
                    kind: RecordKind::LocalDns,
                    raw: String::new(),
                    reason: String::new(),
                },
                "MalformedRecord",
            ),
            (
                ClientError::NotFound {
                    kind: RecordKind::LocalDns,
                    domain: String::new(),
                },
                "RecordNotFound",
            ),
            (ClientError::DnsApi(api_error("k", "m")), "DnsApiError"),
            (ClientError::CnameApi(api_error("k", "m")), "CnameApiError"),
            (
                ClientError::InvalidListBody {
                    kind: RecordKind::LocalCname,
                    reason: String::new(),
                },
                "InvalidListBody",
            ),
            (
                TransportError::HttpConnectionFailed {
                    url: String::new(),
                    reason: String::new(),
                }
                .into(),
                "HttpConnectionFailed",
            ),
        ];

        for (error, reason) in cases {
            assert_eq!(error.status_reason(), reason, "reason for {error:?}");
        }
    }
}
