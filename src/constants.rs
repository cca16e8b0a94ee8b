// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the Pi-hole local DNS client.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Paths
// ============================================================================

/// Collection path for local DNS host entries (`<ip> <domain>` lines)
pub const HOSTS_PATH: &str = "/api/config/dns/hosts";

/// Collection path for local CNAME records (`<domain>,<target>[,<ttl>]` tuples)
pub const CNAME_RECORDS_PATH: &str = "/api/config/dns/cnameRecords";

// ============================================================================
// Authentication Headers
// ============================================================================

/// Header carrying an application password / API key
pub const API_KEY_HEADER: &str = "X-FTL-APIKEY";

/// Header carrying an already negotiated session ID
pub const SESSION_ID_HEADER: &str = "X-FTL-SID";

// ============================================================================
// HTTP Status Codes
// ============================================================================

/// Status returned by the appliance when a record has been created
pub const STATUS_CREATED: u16 = 201;

/// Status returned by the appliance when a record has been deleted
pub const STATUS_NO_CONTENT: u16 = 204;

// ============================================================================
// Client Defaults
// ============================================================================

/// Default per-request timeout for the HTTP transport
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` sent by the HTTP transport
pub const DEFAULT_USER_AGENT: &str = concat!("pihole-localdns/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Environment Variables
// ============================================================================

/// Base URL of the appliance (e.g. `http://pi.hole`)
pub const ENV_PIHOLE_URL: &str = "PIHOLE_URL";

/// API key sent in [`API_KEY_HEADER`]
pub const ENV_PIHOLE_API_TOKEN: &str = "PIHOLE_API_TOKEN";

/// Session ID sent in [`SESSION_ID_HEADER`]
pub const ENV_PIHOLE_SESSION_ID: &str = "PIHOLE_SESSION_ID";

/// Request timeout override in seconds
pub const ENV_PIHOLE_REQUEST_TIMEOUT_SECS: &str = "PIHOLE_REQUEST_TIMEOUT_SECS";

/// Log output format (`text` or `json`)
pub const ENV_LOG_FORMAT: &str = "RUST_LOG_FORMAT";
