// ABOUTME: HTTP mapping of rate limit decisions for the API layer
// ABOUTME: Builds X-RateLimit headers and the 429 RATE_LIMIT_EXCEEDED error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! # Rate Limiting Headers
//!
//! Utilities an HTTP layer uses to render a [`RateLimitDecision`]: standard
//! rate limit headers on every response and a 429 error when denied.

use crate::rate_limiting::RateLimitDecision;
use http::{HeaderMap, HeaderValue};
use nutrilog_core::errors::{AppError, AppResult};

/// HTTP header names for rate limiting
pub mod headers {
    /// HTTP header name for maximum requests allowed in the current window
    pub const X_RATE_LIMIT_LIMIT: &str = "X-RateLimit-Limit";
    /// HTTP header name for remaining requests in the current window
    pub const X_RATE_LIMIT_REMAINING: &str = "X-RateLimit-Remaining";
    /// HTTP header name for retry-after duration in seconds
    pub const RETRY_AFTER: &str = "Retry-After";
}

/// Create a `HeaderMap` with rate limit headers
///
/// `Retry-After` is only present on denials.
#[must_use]
pub fn create_rate_limit_headers(decision: &RateLimitDecision) -> HeaderMap {
    let mut map = HeaderMap::new();

    map.insert(
        headers::X_RATE_LIMIT_LIMIT,
        HeaderValue::from(decision.limit),
    );
    map.insert(
        headers::X_RATE_LIMIT_REMAINING,
        HeaderValue::from(decision.remaining),
    );

    if !decision.allowed {
        map.insert(
            headers::RETRY_AFTER,
            HeaderValue::from(decision.retry_after_seconds),
        );
    }

    map
}

/// Create a rate limit exceeded error for a denied decision
#[must_use]
pub fn create_rate_limit_error(decision: &RateLimitDecision, operation: &str) -> AppError {
    AppError::rate_limit_exceeded(operation, decision.limit, decision.retry_after_seconds)
}

/// Turn a decision into a result the handler can `?` on
///
/// # Errors
///
/// Returns `RATE_LIMIT_EXCEEDED` (HTTP 429) if the request was denied
pub fn check_rate_limit_and_respond(
    decision: &RateLimitDecision,
    operation: &str,
) -> AppResult<()> {
    if decision.allowed {
        Ok(())
    } else {
        Err(create_rate_limit_error(decision, operation))
    }
}
