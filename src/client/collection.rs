// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Collection reconciler for local DNS and CNAME records.
//!
//! The appliance offers no single-record lookup: every read fetches the whole
//! collection and matches the domain client-side. Mutations address a record
//! by its encoded line in the URL path, so deletes always re-read the
//! collection first and send the exact form the appliance reported.
//!
//! Each mutation is a single attempt:
//!
//! ```text
//! Pending -> Succeeded
//!         -> Rejected(ClientError)
//!         -> NotFound (delete only, treated as success)
//! ```

use std::marker::PhantomData;

use reqwest::Method;
use tracing::{debug, info, warn};

use super::transport::Transport;
use crate::constants::{STATUS_CREATED, STATUS_NO_CONTENT};
use crate::errors::ClientError;
use crate::http_errors::classify_error_response;
use crate::records::{decode_list, find_by_domain, AliasRecord, HostRecord, LocalRecord};

/// Handle for one record collection on the appliance.
///
/// Borrowed from a [`Client`](super::Client); holds no state of its own.
pub struct RecordCollection<'a, R, T: ?Sized> {
    transport: &'a T,
    _record: PhantomData<fn() -> R>,
}

/// Local DNS host entries.
pub type LocalDns<'a, T> = RecordCollection<'a, HostRecord, T>;

/// Local CNAME aliases.
pub type LocalCname<'a, T> = RecordCollection<'a, AliasRecord, T>;

impl<'a, R: LocalRecord, T: Transport + ?Sized> RecordCollection<'a, R, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            transport,
            _record: PhantomData,
        }
    }

    fn mutation_path(record: &R) -> String {
        format!("{}/{}", R::KIND.collection_path(), record.path_segment())
    }

    /// List every record in the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the appliance answers with a
    /// non-success status, or any line is malformed (no partial results).
    pub async fn list(&self) -> Result<Vec<R>, ClientError> {
        let path = R::KIND.collection_path();
        let response = self.transport.request(Method::GET, path, None).await?;

        if !response.is_success() {
            return Err(classify_error_response(
                R::KIND,
                response.status,
                &response.body,
            ));
        }

        let records = decode_list::<R>(&response.body)?;
        debug!(kind = %R::KIND, count = records.len(), "Listed local records");
        Ok(records)
    }

    /// Find a record by domain, case-insensitively. First match wins.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if no record matches, or any error
    /// from [`Self::list`].
    pub async fn get(&self, domain: &str) -> Result<R, ClientError> {
        let records = self.list().await?;

        find_by_domain(&records, domain)
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                kind: R::KIND,
                domain: domain.to_string(),
            })
    }

    /// Create `record` and return the appliance's view of it.
    ///
    /// # Errors
    ///
    /// Returns a classified error if the appliance does not answer 201, or any
    /// error from the confirmatory [`Self::get`].
    pub async fn create_record(&self, record: &R) -> Result<R, ClientError> {
        let path = Self::mutation_path(record);

        info!(kind = %R::KIND, domain = %record.domain(), path = %path, "Creating local record");

        let response = self.transport.request(Method::PUT, &path, None).await?;

        if response.status != STATUS_CREATED {
            let err = classify_error_response(R::KIND, response.status, &response.body);
            warn!(
                kind = %R::KIND,
                domain = %record.domain(),
                status = response.status,
                reason = err.status_reason(),
                error = %err,
                "Appliance rejected record creation"
            );
            return Err(err);
        }

        self.get(record.domain()).await
    }

    /// Delete the record for `domain`.
    ///
    /// Deleting a domain that is not present succeeds without a request.
    ///
    /// # Errors
    ///
    /// Returns a classified error if the appliance does not answer 204, or any
    /// lookup error other than not-found.
    pub async fn delete(&self, domain: &str) -> Result<(), ClientError> {
        let record = match self.get(domain).await {
            Ok(record) => record,
            Err(err) if err.is_not_found() => {
                debug!(kind = %R::KIND, domain = %domain, "Record already absent, nothing to delete");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let path = Self::mutation_path(&record);

        info!(kind = %R::KIND, domain = %domain, path = %path, "Deleting local record");

        let response = self.transport.request(Method::DELETE, &path, None).await?;

        if response.status != STATUS_NO_CONTENT {
            let err = classify_error_response(R::KIND, response.status, &response.body);
            warn!(
                kind = %R::KIND,
                domain = %domain,
                status = response.status,
                reason = err.status_reason(),
                error = %err,
                "Appliance rejected record deletion"
            );
            return Err(err);
        }

        Ok(())
    }
}

impl<T: Transport + ?Sized> RecordCollection<'_, HostRecord, T> {
    /// Create a host entry mapping `domain` to `ip`.
    ///
    /// # Errors
    ///
    /// See [`Self::create_record`].
    pub async fn create(&self, domain: &str, ip: &str) -> Result<HostRecord, ClientError> {
        self.create_record(&HostRecord::new(ip, domain)).await
    }
}

impl<T: Transport + ?Sized> RecordCollection<'_, AliasRecord, T> {
    /// Create an alias from `domain` to `target`.
    ///
    /// # Errors
    ///
    /// See [`Self::create_record`].
    pub async fn create(&self, domain: &str, target: &str) -> Result<AliasRecord, ClientError> {
        self.create_record(&AliasRecord::new(domain, target)).await
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod collection_tests;
