// ABOUTME: Integration tests for the HTTP mapping of rate limit decisions
// ABOUTME: Header rendering, 429 error construction and the check-and-respond helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrilog::errors::{ErrorCode, ErrorResponse};
use nutrilog::rate_limiting::RateLimitDecision;
use nutrilog::rate_limiting_middleware::{
    check_rate_limit_and_respond, create_rate_limit_error, create_rate_limit_headers, headers,
};

const ADMITTED: RateLimitDecision = RateLimitDecision {
    allowed: true,
    limit: 20,
    remaining: 19,
    retry_after_seconds: 0,
};

const DENIED: RateLimitDecision = RateLimitDecision {
    allowed: false,
    limit: 20,
    remaining: 0,
    retry_after_seconds: 5400,
};

#[test]
fn test_headers_for_admitted_request() {
    let map = create_rate_limit_headers(&ADMITTED);
    assert_eq!(map.get(headers::X_RATE_LIMIT_LIMIT).unwrap(), "20");
    assert_eq!(map.get(headers::X_RATE_LIMIT_REMAINING).unwrap(), "19");
    assert!(map.get(headers::RETRY_AFTER).is_none());
}

#[test]
fn test_headers_for_denied_request() {
    let map = create_rate_limit_headers(&DENIED);
    assert_eq!(map.get(headers::X_RATE_LIMIT_REMAINING).unwrap(), "0");
    assert_eq!(map.get(headers::RETRY_AFTER).unwrap(), "5400");
    // Header lookup is case-insensitive
    assert_eq!(map.get("retry-after").unwrap(), "5400");
}

#[test]
fn test_rate_limit_error_creation() {
    let error = create_rate_limit_error(&DENIED, "analyze");
    assert_eq!(error.code, ErrorCode::RateLimitExceeded);
    assert_eq!(error.http_status(), 429);
    assert!(error.message.contains("analyze"));
    assert!(error.message.contains("20"));

    assert_eq!(error.details["retry_after"], 5400);
    assert_eq!(error.details["operation"], "analyze");
}

#[test]
fn test_rate_limit_error_response_body() {
    let response = ErrorResponse::from(create_rate_limit_error(&DENIED, "score"));
    let body: serde_json::Value = serde_json::to_value(&response).unwrap();
    assert_eq!(body["error"]["code"], "RATE_LIMIT_EXCEEDED");
    assert_eq!(body["error"]["details"]["retry_after"], 5400);
}

#[test]
fn test_rate_limit_check() {
    assert!(check_rate_limit_and_respond(&ADMITTED, "analyze").is_ok());

    let error = check_rate_limit_and_respond(&DENIED, "analyze").unwrap_err();
    assert_eq!(error.code, ErrorCode::RateLimitExceeded);
    assert_eq!(error.details["limit"], 20);
}
