// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Builds a tracing-subscriber registry with env filter and json, pretty or compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Structured logging configuration
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! job of the binary. Events go to stderr so JSON results printed on stdout
//! stay machine-readable.

use anyhow::Result;
use nutrilog_core::constants::service_names;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            Some("pretty") => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::NUTRILOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);

        // Production logs are shipped to a collector
        let is_production = environment == "production";
        let format = if is_production && env::var("LOG_FORMAT").is_err() {
            LogFormat::Json
        } else {
            LogFormat::parse(env::var("LOG_FORMAT").ok().as_deref())
        };

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: env::var("SERVICE_VERSION").unwrap_or(defaults.service_version),
            environment,
        }
    }

    /// Environment filter for this configuration
    ///
    /// The configured level applies to everything; nutrilog crates are pinned
    /// to the same level so a noisy dependency directive cannot hide them.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let fallback = || tracing::Level::INFO.into();
        EnvFilter::new(&self.level)
            .add_directive(
                format!("nutrilog={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| fallback()),
            )
            .add_directive(
                format!("nutrilog_core={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| fallback()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(layer).try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment variables
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse_falls_back_to_compact() {
        assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(Some("xml")), LogFormat::Compact);
        assert_eq!(LogFormat::parse(None), LogFormat::Compact);
    }

    #[test]
    fn test_default_config_names_service() {
        let config = LoggingConfig::default();
        assert_eq!(config.service_name, "nutrilog");
        assert_eq!(config.format, LogFormat::Compact);
    }
}
