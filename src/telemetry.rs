// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Logging setup for applications embedding the client.
//!
//! The client itself only emits `tracing` events. [`init_logging`] installs a
//! global subscriber:
//!
//! - Respects `RUST_LOG` if set, otherwise defaults to `info`
//! - Respects `RUST_LOG_FORMAT` (`json` or `text`, default `text`)
//!
//! Format: timestamp file:line LEVEL message

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::constants::ENV_LOG_FORMAT;

/// Error returned when a global subscriber is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact human-readable lines with ANSI colors
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    /// Unknown values fall back to [`LogFormat::Text`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        })
    }
}

impl LogFormat {
    /// Format selected by `RUST_LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(ENV_LOG_FORMAT)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

/// Install the global `tracing` subscriber using the environment settings.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_logging() -> Result<(), InitError> {
    init_logging_with(LogFormat::from_env())
}

/// Install the global `tracing` subscriber with an explicit format.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_logging_with(format: LogFormat) -> Result<(), InitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_ansi(true).compact().try_init(),
    }
}
