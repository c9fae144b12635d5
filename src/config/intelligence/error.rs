// ABOUTME: Configuration error types for nutrition engine validation
// ABOUTME: Defines error variants for invalid ranges, weights, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Configuration error types for nutrition engine validation.

use nutrilog_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds are not in the required order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Percentages don't sum to the required total (e.g., not 100%)
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
