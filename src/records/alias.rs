// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Local CNAME alias records.
//!
//! The appliance stores each alias as a comma-separated tuple:
//!
//! ```text
//! <domain>,<target>[,<ttl>]
//! ```
//!
//! Whitespace around each field is insignificant. Unlike host lines, a third
//! field that is not an integer is an error.

use std::borrow::Cow;

use super::{escape_path_segment, malformed, LocalRecord, RecordKind};
use crate::errors::ClientError;

/// A local CNAME entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    domain: String,
    target: String,
    ttl: Option<i64>,
    raw: Option<String>,
}

impl AliasRecord {
    /// Build an alias for submission to the appliance.
    pub fn new(domain: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            target: target.into(),
            ttl: None,
            raw: None,
        }
    }

    /// Set the TTL.
    #[must_use]
    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Alias name.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Canonical name the alias points to.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// TTL, if the tuple carried one.
    #[must_use]
    pub fn ttl(&self) -> Option<i64> {
        self.ttl
    }

    /// The trimmed tuple as reported by the appliance.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl LocalRecord for AliasRecord {
    const KIND: RecordKind = RecordKind::LocalCname;

    fn parse(raw: &str) -> Result<Self, ClientError> {
        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();

        let (domain, target, ttl_field) = match fields.as_slice() {
            [domain, target] => (*domain, *target, None),
            [domain, target, ttl] => (*domain, *target, Some(*ttl)),
            _ => {
                return Err(malformed(
                    Self::KIND,
                    raw,
                    format!("expected 2 or 3 fields, found {}", fields.len()),
                ))
            }
        };

        let ttl = match ttl_field.filter(|field| !field.is_empty()) {
            Some(field) => Some(field.parse::<i64>().map_err(|e| {
                malformed(Self::KIND, raw, format!("invalid TTL {field:?}: {e}"))
            })?),
            None => None,
        };

        Ok(Self {
            domain: domain.to_string(),
            target: target.to_string(),
            ttl,
            raw: Some(raw.trim().to_string()),
        })
    }

    fn domain(&self) -> &str {
        &self.domain
    }

    fn to_line(&self) -> Cow<'_, str> {
        if let Some(raw) = self.raw.as_deref().filter(|_| !self.domain.is_empty()) {
            return Cow::Borrowed(raw);
        }

        let mut line = format!("{},{}", self.domain.trim(), self.target.trim());
        if let Some(ttl) = self.ttl {
            line.push(',');
            line.push_str(&ttl.to_string());
        }
        Cow::Owned(line)
    }

    /// Commas that survive escaping are forced to `%2C`.
    fn path_segment(&self) -> String {
        escape_path_segment(&self.to_line()).replace(',', "%2C")
    }
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod alias_tests;
