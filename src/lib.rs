// ABOUTME: Main library entry point for the Nutrilog nutrition core
// ABOUTME: Provides the nutrition engine, the AI-call rate limiter and their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

#![deny(unsafe_code)]

//! # Nutrilog
//!
//! Computational core of a meal-photo nutrition tracker. An external vision
//! model estimates the macros of a photographed meal; this crate turns
//! profiles, meals and body measurements into targets, projections and
//! statistics, and guards the costly AI calls with per-user rate limits.
//!
//! ## Architecture
//!
//! - **`intelligence`**: stateless nutrition engine (BMR, TDEE, targets, diet
//!   classification, body composition, projections, summaries, fasting)
//! - **`rate_limiting`**: fixed-window limiter over an injected store and clock
//! - **`rate_limiting_middleware`**: HTTP headers and 429 mapping of decisions
//! - **`config`**: coefficient tables and environment configuration
//! - **`logging`**: `tracing` subscriber setup
//!
//! Models, errors and constants live in the `nutrilog-core` crate and are
//! re-exported here.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrilog::config::environment::ServerConfig;
//! use nutrilog::errors::AppResult;
//! use nutrilog::rate_limiting::{RateLimitedOperation, RateLimiter};
//! use nutrilog::rate_limiting_middleware::check_rate_limit_and_respond;
//!
//! fn analyze_photo(limiter: &RateLimiter, user_id: &str) -> AppResult<()> {
//!     let operation = RateLimitedOperation::Analyze;
//!     let decision = limiter.check_operation(user_id, operation);
//!     check_rate_limit_and_respond(&decision, operation.as_str())?;
//!     // call the vision model
//!     Ok(())
//! }
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let limiter = RateLimiter::from_config(&config);
//!     analyze_photo(&limiter, "user-1")
//! }
//! ```

/// Coefficient tables and environment configuration
pub mod config;

/// Nutrition engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Per-user, per-operation rate limiting
pub mod rate_limiting;

/// HTTP header and error mapping of rate limit decisions
pub mod rate_limiting_middleware;

pub use nutrilog_core::{constants, errors, models};
