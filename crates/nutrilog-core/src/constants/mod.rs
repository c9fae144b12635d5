// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for physiology math, rate limits, and service naming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Energy densities and projection thresholds used by the nutrition engine
pub mod physiology;
/// Fixed per-operation rate limit table
pub mod rate_limits;

/// Service names for structured logging
pub mod service_names {
    /// Default service name reported in log records
    pub const NUTRILOG: &str = "nutrilog";
    /// Name reported by the command-line front end
    pub const NUTRILOG_CLI: &str = "nutrilog-cli";
}

/// Time constants
pub mod time {
    /// Seconds in one hour
    pub const HOUR_SECONDS: u64 = 3600;
    /// Seconds in one day
    pub const DAY_SECONDS: u64 = 86_400;
    /// Minutes in one day
    pub const DAY_MINUTES: u32 = 24 * 60;
    /// Hours in one day
    pub const DAY_HOURS: u8 = 24;
}
