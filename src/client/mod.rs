// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Pi-hole local record management via the configuration API.
//!
//! # Architecture
//!
//! [`Client`] owns a [`Transport`] and hands out borrowed collection handles:
//!
//! - [`Client::local_dns`] - host entries under `/api/config/dns/hosts`
//! - [`Client::local_cname`] - aliases under `/api/config/dns/cnameRecords`
//!
//! # Example
//!
//! ```rust,no_run
//! use pihole_localdns::{Client, ClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(&ClientConfig::new("http://pi.hole").with_api_token("secret"))?;
//!
//! let record = client.local_dns().create("nas.lan", "192.168.1.10").await?;
//! assert_eq!(record.ip(), "192.168.1.10");
//!
//! client.local_cname().create("files.lan", "nas.lan").await?;
//! client.local_cname().delete("files.lan").await?;
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod transport;

pub use collection::{LocalCname, LocalDns, RecordCollection};
pub use transport::{HttpTransport, Transport, TransportResponse};

use std::sync::Arc;

use crate::config::{ClientConfig, ConfigError};

/// Entry point for local DNS and CNAME management.
#[derive(Debug)]
pub struct Client<T: ?Sized = HttpTransport> {
    transport: Arc<T>,
}

impl<T: ?Sized> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl Client<HttpTransport> {
    /// Create a client talking HTTP to the configured appliance.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Create a client from `PIHOLE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment does not hold a valid configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&ClientConfig::from_env()?)
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over any transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }
}

impl<T: Transport + ?Sized> Client<T> {
    /// Create a client over a shared (possibly type-erased) transport.
    pub fn from_shared(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Local DNS host entries.
    #[must_use]
    pub fn local_dns(&self) -> LocalDns<'_, T> {
        RecordCollection::new(self.transport.as_ref())
    }

    /// Local CNAME aliases.
    #[must_use]
    pub fn local_cname(&self) -> LocalCname<'_, T> {
        RecordCollection::new(self.transport.as_ref())
    }
}
