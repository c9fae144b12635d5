// ABOUTME: Unified error handling with standard error codes and JSON error responses
// ABOUTME: Defines ErrorCode, AppError, ErrorResponse and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! # Unified Error Handling System
//!
//! Centralized error type for the Nutrilog workspace. Every fallible boundary
//! (profile validation, enum parsing, configuration loading, rate limit
//! denial mapping) produces an [`AppError`] carrying an [`ErrorCode`], so the
//! API layer can render a consistent JSON body and HTTP status.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Rate Limiting (2000-2999)
    /// Too many requests for this user and operation in the current window
    #[serde(rename = "RATE_LIMIT_EXCEEDED")]
    RateLimitExceeded = 2000,

    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Numeric input outside of its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Serialization or deserialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange => 400,
            Self::RateLimitExceeded => 429,
            Self::ConfigInvalid | Self::InternalError | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::RateLimitExceeded => "Rate limit exceeded. Please slow down your requests",
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details for the response body (`null` when absent)
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Attach structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Numeric value outside its accepted range
    pub fn value_out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message.into())
            .with_details(serde_json::json!({ "field": field }))
    }

    /// Rate limit exceeded for an operation
    #[must_use]
    pub fn rate_limit_exceeded(operation: &str, limit: u32, retry_after_seconds: u64) -> Self {
        Self::new(
            ErrorCode::RateLimitExceeded,
            format!(
                "Limit of {limit} requests for '{operation}' reached. Try again in {retry_after_seconds}s"
            ),
        )
        .with_details(serde_json::json!({
            "operation": operation,
            "limit": limit,
            "retry_after": retry_after_seconds,
        }))
    }

    /// Invalid configuration value
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_error_code_http_status() {
        let table = [
            (ErrorCode::RateLimitExceeded, 429, "RATE_LIMIT_EXCEEDED"),
            (ErrorCode::InvalidInput, 400, "INVALID_INPUT"),
            (ErrorCode::ValueOutOfRange, 400, "VALUE_OUT_OF_RANGE"),
            (ErrorCode::ConfigInvalid, 500, "CONFIG_INVALID"),
            (ErrorCode::InternalError, 500, "INTERNAL_ERROR"),
            (ErrorCode::SerializationError, 500, "SERIALIZATION_ERROR"),
        ];
        for (code, status, wire) in table {
            assert_eq!(code.http_status(), status, "{wire}");
            assert_eq!(serde_json::to_value(code).unwrap(), wire);
        }
    }

    #[test]
    fn test_json_failure_maps_to_serialization_error() {
        let parse_error = serde_json::from_str::<Value>("{").unwrap_err();
        let error = AppError::from(parse_error);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.source.is_some());
    }

    #[test]
    fn test_error_display_includes_description() {
        let error = AppError::invalid_input("gender must be male or female");
        let rendered = error.to_string();
        assert!(rendered.starts_with("The provided input is invalid"));
        assert!(rendered.ends_with("gender must be male or female"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::rate_limit_exceeded("analyze", 20, 3600);
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("RATE_LIMIT_EXCEEDED"));
        assert!(json.contains("\"retry_after\":3600"));
    }

    #[test]
    fn test_error_response_omits_null_details() {
        let response = ErrorResponse::from(AppError::internal("boom"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }
}
