// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # pihole-localdns - Pi-hole Local DNS and CNAME Client
//!
//! A small async client for the two record collections a Pi-hole v6 appliance
//! keeps in its configuration: local DNS host entries and local CNAME aliases.
//!
//! ## Overview
//!
//! The appliance stores each collection as a list of strings. This crate:
//!
//! - Parses host lines (`IP DOMAIN [TTL] [# comment]`) and alias tuples
//!   (`domain,target[,ttl]`) into typed records
//! - Encodes records back into the exact path segment the appliance expects
//! - Reconciles the collections with `list`, `get`, `create` and `delete`
//! - Classifies non-success responses into structured errors
//!
//! ## Modules
//!
//! - [`records`] - Record types, parsing and path-segment encoding
//! - [`client`] - The reconciler and its HTTP transport
//! - [`http_errors`] - Classification of rejected requests
//! - [`errors`] - Error taxonomy
//! - [`config`] - Client configuration from code or environment
//! - [`telemetry`] - Logging initialization
//!
//! ## Example
//!
//! ```rust,no_run
//! use pihole_localdns::{Client, ClientConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = ClientConfig::new("http://pi.hole").with_api_token("app-password");
//! let client = Client::new(&config)?;
//!
//! let host = client.local_dns().create("nas.lan", "192.168.1.20").await?;
//! println!("{} -> {}", host.domain(), host.ip());
//!
//! client.local_cname().create("files.lan", "nas.lan").await?;
//! client.local_cname().delete("files.lan").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod http_errors;
pub mod records;
pub mod telemetry;

pub use client::{Client, HttpTransport, LocalCname, LocalDns, RecordCollection, Transport, TransportResponse};
pub use config::{ClientConfig, ConfigError, Credentials};
pub use errors::{ApiError, ClientError, TransportError};
pub use records::{AliasRecord, HostRecord, LocalRecord, RecordKind};

#[cfg(test)]
mod errors_tests;
#[cfg(test)]
mod http_errors_tests;
