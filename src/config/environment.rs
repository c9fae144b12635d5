// ABOUTME: Environment-based configuration for the Nutrilog process
// ABOUTME: Loads deployment environment and rate limiter sweep settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Environment-only configuration
//!
//! All process settings come from environment variables; there is no
//! configuration file. Unset variables fall back to defaults, malformed ones
//! are rejected with a `CONFIG_INVALID` error instead of being guessed.

use nutrilog_core::constants::rate_limits::DEFAULT_SWEEP_INTERVAL_SECS;
use nutrilog_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Pre-production
    Staging,
    /// Production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse an environment name
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` for an unknown environment name
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            "testing" | "test" => Ok(Self::Testing),
            other => Err(AppError::config_invalid(format!("Unknown ENVIRONMENT '{other}'"))),
        }
    }

    /// Whether this is a production deployment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Rate limiter settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitingSettings {
    /// Minimum interval between opportunistic sweeps of expired entries (seconds)
    pub sweep_interval_secs: u64,
}

impl RateLimitingSettings {
    /// Sweep interval as a `Duration`
    #[must_use]
    pub const fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for RateLimitingSettings {
    fn default() -> Self {
        Self {
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

/// Process configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Rate limiter settings
    pub rate_limiting: RateLimitingSettings,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// - `ENVIRONMENT`: development | staging | production | testing
    /// - `RATE_LIMIT_SWEEP_INTERVAL_SECS`: positive integer, default 300
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a variable is set to a malformed value
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let environment = Environment::parse(&env_var_or("ENVIRONMENT", "development"))?;

        let sweep_raw = env_var_or(
            "RATE_LIMIT_SWEEP_INTERVAL_SECS",
            &DEFAULT_SWEEP_INTERVAL_SECS.to_string(),
        );
        let sweep_interval_secs: u64 = sweep_raw.trim().parse().map_err(|_| {
            AppError::config_invalid(format!(
                "Invalid RATE_LIMIT_SWEEP_INTERVAL_SECS value '{sweep_raw}'"
            ))
        })?;
        if sweep_interval_secs == 0 {
            return Err(AppError::config_invalid(
                "RATE_LIMIT_SWEEP_INTERVAL_SECS must be greater than zero",
            ));
        }

        let config = Self {
            environment,
            rate_limiting: RateLimitingSettings {
                sweep_interval_secs,
            },
        };
        info!(
            environment = %config.environment,
            sweep_interval_secs = config.rate_limiting.sweep_interval_secs,
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Read an environment variable with a default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
