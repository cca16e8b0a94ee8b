// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for CNAME tuple parsing and encoding.

#[cfg(test)]
mod tests {
    use crate::errors::ClientError;
    use crate::records::{AliasRecord, LocalRecord, RecordKind};

    #[test]
    fn test_parse_two_fields() {
        let record = AliasRecord::parse("alias.lan,target.lan").unwrap();
        assert_eq!(record.domain(), "alias.lan");
        assert_eq!(record.target(), "target.lan");
        assert_eq!(record.ttl(), None);
        assert_eq!(record.raw(), Some("alias.lan,target.lan"));
    }

    #[test]
    fn test_parse_ttl_with_spaces_around_commas() {
        let record = AliasRecord::parse("example.com , target.test , 3600").unwrap();
        assert_eq!(record.domain(), "example.com");
        assert_eq!(record.target(), "target.test");
        assert_eq!(record.ttl(), Some(3600));
    }

    #[test]
    fn test_parse_empty_third_field_means_no_ttl() {
        let record = AliasRecord::parse("example.com,target.test, ").unwrap();
        assert_eq!(record.ttl(), None);
    }

    #[test]
    fn test_parse_ttl_above_i32_range() {
        let record = AliasRecord::parse("a.lan,b.lan,3000000000").unwrap();
        assert_eq!(record.ttl(), Some(3_000_000_000));
    }

    #[test]
    fn test_parse_raw_is_trimmed_tuple() {
        let record = AliasRecord::parse("  example.com , target.test  ").unwrap();
        assert_eq!(record.raw(), Some("example.com , target.test"));
    }

    #[test]
    fn test_parse_single_field_is_malformed() {
        let err = AliasRecord::parse("example.com").unwrap_err();
        match err {
            ClientError::MalformedRecord { kind, reason, .. } => {
                assert_eq!(kind, RecordKind::LocalCname);
                assert_eq!(reason, "expected 2 or 3 fields, found 1");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_four_fields_is_malformed() {
        assert!(matches!(
            AliasRecord::parse("a.lan,b.lan,60,extra"),
            Err(ClientError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_parse_non_numeric_ttl_is_malformed() {
        let err = AliasRecord::parse("example.com,target.test,not-a-number").unwrap_err();
        assert!(matches!(err, ClientError::MalformedRecord { .. }));
        assert!(err.to_string().starts_with("invalid CNAME record"));
        assert!(err.to_string().contains("not-a-number"));
    }

    // ============================================================================
    // Encoding
    // ============================================================================

    #[test]
    fn test_new_record_encodes_without_ttl() {
        let record = AliasRecord::new("alias.lan", "target.lan");
        assert_eq!(record.to_line(), "alias.lan,target.lan");
        assert_eq!(record.path_segment(), "alias.lan%2Ctarget.lan");
    }

    #[test]
    fn test_new_record_encodes_ttl() {
        let record = AliasRecord::new("example.com", "target.test").with_ttl(3600);
        assert_eq!(record.to_line(), "example.com,target.test,3600");
        assert_eq!(record.path_segment(), "example.com%2Ctarget.test%2C3600");
    }

    #[test]
    fn test_new_record_trims_fields() {
        let record = AliasRecord::new(" alias.lan ", "target.lan ");
        assert_eq!(record.to_line(), "alias.lan,target.lan");
    }

    #[test]
    fn test_parsed_record_reuses_server_spacing() {
        let record = AliasRecord::parse("example.com , target.test , 3600").unwrap();
        assert_eq!(record.to_line(), "example.com , target.test , 3600");
        assert_eq!(
            record.path_segment(),
            "example.com%20%2C%20target.test%20%2C%203600"
        );
    }

    #[test]
    fn test_path_segment_has_no_literal_commas() {
        let record = AliasRecord::parse("a.lan,b.lan,60").unwrap();
        assert!(!record.path_segment().contains(','));
    }
}
