// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Local DNS host records.
//!
//! The appliance stores each entry as a hosts-file style line:
//!
//! ```text
//! <ip> <domain> [<ttl>] [<extra>...] [# <comment>]
//! ```
//!
//! Fields are separated by any run of whitespace. The third field is a TTL
//! only if it parses as an integer; otherwise it and everything after it is
//! folded into the comment.

use std::borrow::Cow;

use super::{malformed, LocalRecord, RecordKind};
use crate::errors::ClientError;

/// A local DNS (A/AAAA) entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    ip: String,
    domain: String,
    ttl: Option<i64>,
    comment: Option<String>,
    raw: Option<String>,
}

/// Interpretation of the fields after `<ip> <domain>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Trailing<'a> {
    /// Nothing after the domain
    Empty,
    /// Numeric third field; remaining fields are comment text
    Ttl { ttl: i64, rest: &'a [&'a str] },
    /// Non-numeric third field; it and all remaining fields are comment text
    Comment(&'a [&'a str]),
}

/// Apply the trailing-field rules in order: TTL first, comment as fallthrough.
pub(crate) fn classify_trailing<'a>(fields: &'a [&'a str]) -> Trailing<'a> {
    let Some((first, rest)) = fields.split_first() else {
        return Trailing::Empty;
    };

    if let Ok(ttl) = first.parse::<i64>() {
        return Trailing::Ttl { ttl, rest };
    }

    Trailing::Comment(fields)
}

fn join_comment(hash_comment: &str, extra: &[&str]) -> Option<String> {
    let comment = std::iter::once(hash_comment)
        .chain(extra.iter().copied())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    (!comment.is_empty()).then_some(comment)
}

impl HostRecord {
    /// Build a record for submission to the appliance.
    pub fn new(ip: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            domain: domain.into(),
            ttl: None,
            comment: None,
            raw: None,
        }
    }

    /// Set the TTL.
    ///
    /// Not sent on creation, which only submits `<ip> <domain>`.
    #[must_use]
    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set the comment.
    ///
    /// Like the TTL, the comment is not sent when the record is created.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.comment = (!comment.is_empty()).then_some(comment);
        self
    }

    /// Domain name of the entry.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// IP address as stored; not validated.
    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// TTL, if the line carried one.
    #[must_use]
    pub fn ttl(&self) -> Option<i64> {
        self.ttl
    }

    /// Comment text, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The line exactly as reported by the appliance.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl LocalRecord for HostRecord {
    const KIND: RecordKind = RecordKind::LocalDns;

    fn parse(raw: &str) -> Result<Self, ClientError> {
        let line = raw.trim();
        if line.is_empty() {
            return Err(malformed(Self::KIND, raw, "empty line"));
        }

        let (line, hash_comment) = match line.split_once('#') {
            Some((before, after)) => (before, after.trim()),
            None => (line, ""),
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [ip, domain, trailing @ ..] = fields.as_slice() else {
            return Err(malformed(
                Self::KIND,
                raw,
                format!("expected at least 2 fields, found {}", fields.len()),
            ));
        };

        let (ttl, comment) = match classify_trailing(trailing) {
            Trailing::Empty => (None, join_comment(hash_comment, &[])),
            Trailing::Ttl { ttl, rest } => (Some(ttl), join_comment(hash_comment, rest)),
            Trailing::Comment(extra) => (None, join_comment(hash_comment, extra)),
        };

        Ok(Self {
            ip: (*ip).to_string(),
            domain: (*domain).to_string(),
            ttl,
            comment,
            raw: Some(raw.to_string()),
        })
    }

    fn domain(&self) -> &str {
        &self.domain
    }

    /// TTL and comment are not part of the creation tuple.
    fn to_line(&self) -> Cow<'_, str> {
        match &self.raw {
            Some(raw) => Cow::Borrowed(raw),
            None => Cow::Owned(format!("{} {}", self.ip, self.domain)),
        }
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
