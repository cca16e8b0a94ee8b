// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record codec for the appliance's line-oriented configuration format.
//!
//! The appliance stores local DNS entries and CNAME aliases as plain strings
//! inside its JSON configuration. This module maps those strings to structured
//! records and back.
//!
//! - [`host`] - `<ip> <domain> [ttl] [# comment]` lines
//! - [`alias`] - `<domain>,<target>[,<ttl>]` tuples

pub mod alias;
pub mod host;

pub use alias::AliasRecord;
pub use host::HostRecord;

use std::borrow::Cow;
use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Deserializer};

use crate::constants::{CNAME_RECORDS_PATH, HOSTS_PATH};
use crate::errors::ClientError;

/// Characters escaped in a URL path segment.
///
/// Unreserved characters and `$ & + : = @` pass through; space, `,`, `/`,
/// `;`, `?` and everything else are percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// The two record collections managed by the appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Local DNS host entries
    LocalDns,
    /// Local CNAME aliases
    LocalCname,
}

impl RecordKind {
    /// API path of the collection.
    #[must_use]
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::LocalDns => HOSTS_PATH,
            Self::LocalCname => CNAME_RECORDS_PATH,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalDns => f.write_str("DNS record"),
            Self::LocalCname => f.write_str("CNAME record"),
        }
    }
}

/// A record stored by the appliance as a single line of text.
pub trait LocalRecord: Sized + Clone + Send + Sync {
    /// Collection this record type belongs to.
    const KIND: RecordKind;

    /// Parse one line as reported by the appliance.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MalformedRecord`] if the line violates the grammar.
    fn parse(raw: &str) -> Result<Self, ClientError>;

    /// Domain used to identify the record.
    fn domain(&self) -> &str;

    /// Unescaped textual form sent to the appliance.
    ///
    /// This is the server-observed raw form when the record was read from the
    /// appliance, otherwise a freshly encoded line.
    fn to_line(&self) -> Cow<'_, str>;

    /// Percent-escaped form of [`Self::to_line`] for use as a URL path segment.
    fn path_segment(&self) -> String {
        escape_path_segment(&self.to_line())
    }
}

/// Percent-escape `value` for use as a single URL path segment.
///
/// Spaces become `%20`, never `+`.
#[must_use]
pub fn escape_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Build a [`ClientError::MalformedRecord`] for `kind`.
pub(crate) fn malformed(kind: RecordKind, raw: &str, reason: impl Into<String>) -> ClientError {
    ClientError::MalformedRecord {
        kind,
        raw: raw.to_string(),
        reason: reason.into(),
    }
}

/// `{"config":{"dns":{...}}}` list envelope shared by both collections.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    config: ConfigSection,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigSection {
    #[serde(default, deserialize_with = "null_as_default")]
    dns: DnsSection,
}

#[derive(Debug, Default, Deserialize)]
struct DnsSection {
    #[serde(default, deserialize_with = "null_as_default")]
    hosts: Vec<String>,
    #[serde(default, rename = "cnameRecords", deserialize_with = "null_as_default")]
    cname_records: Vec<String>,
}

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ListEnvelope {
    /// Raw lines of the collection for `kind`.
    pub(crate) fn lines(&self, kind: RecordKind) -> &[String] {
        match kind {
            RecordKind::LocalDns => &self.config.dns.hosts,
            RecordKind::LocalCname => &self.config.dns.cname_records,
        }
    }
}

/// Decode a list response body into records.
///
/// The first malformed line aborts decoding; no partial collection is returned.
///
/// # Errors
///
/// Returns [`ClientError::InvalidListBody`] if the body is not the expected
/// envelope, or [`ClientError::MalformedRecord`] for the first bad line.
pub fn decode_list<R: LocalRecord>(body: &[u8]) -> Result<Vec<R>, ClientError> {
    let envelope: ListEnvelope =
        serde_json::from_slice(body).map_err(|e| ClientError::InvalidListBody {
            kind: R::KIND,
            reason: e.to_string(),
        })?;

    envelope
        .lines(R::KIND)
        .iter()
        .map(|line| R::parse(line))
        .collect()
}

/// Case-insensitive domain comparison.
#[must_use]
pub fn domains_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// First record whose domain matches `domain` case-insensitively.
#[must_use]
pub fn find_by_domain<'a, R: LocalRecord>(records: &'a [R], domain: &str) -> Option<&'a R> {
    records
        .iter()
        .find(|record| domains_match(record.domain(), domain))
}
