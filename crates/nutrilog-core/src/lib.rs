// ABOUTME: Core types and constants for the Nutrilog nutrition platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

#![deny(unsafe_code)]

//! # Nutrilog Core
//!
//! Foundation crate providing shared types and constants for the Nutrilog
//! nutrition engine. It changes infrequently so the root crate benefits from
//! incremental compilation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `ErrorResponse`
//! - **constants**: Physiology constants, rate limit table, and service names
//! - **models**: Profile, meal, and body measurement records

/// Unified error handling system with standard error codes and HTTP statuses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, Meal, `BodyMeasurement`)
pub mod models;
