// ABOUTME: Fixed per-operation rate limit table for AI-backed and CRUD operations
// ABOUTME: AI operations use strict daily windows, CRUD operations hourly windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Rate limit table
//!
//! AI-backed operations (photo analysis, meal scoring, weekly report) cost
//! money per call, so their windows are daily and strict. CRUD operations use
//! hourly windows sized for abuse prevention.

use super::time::{DAY_SECONDS, HOUR_SECONDS};

/// Default interval between opportunistic sweeps of expired entries (seconds)
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 5 * 60;

/// Photo analysis through the vision model: 20 per day
pub const ANALYZE: (u32, u64) = (20, DAY_SECONDS);
/// AI meal scoring: 30 per day
pub const SCORE: (u32, u64) = (30, DAY_SECONDS);
/// AI weekly report: 5 per day
pub const WEEKLY_REPORT: (u32, u64) = (5, DAY_SECONDS);

/// Meal history reads: 120 per hour
pub const MEALS_READ: (u32, u64) = (120, HOUR_SECONDS);
/// Meal creation and updates: 60 per hour
pub const MEALS_WRITE: (u32, u64) = (60, HOUR_SECONDS);
/// Meal deletion: 30 per hour
pub const MEALS_DELETE: (u32, u64) = (30, HOUR_SECONDS);
/// Profile reads: 120 per hour
pub const PROFILE_READ: (u32, u64) = (120, HOUR_SECONDS);
/// Profile updates: 30 per hour
pub const PROFILE_WRITE: (u32, u64) = (30, HOUR_SECONDS);
/// Body measurement reads and writes: 60 per hour
pub const MEASUREMENTS: (u32, u64) = (60, HOUR_SECONDS);
/// Meal template reads and writes: 60 per hour
pub const TEMPLATES: (u32, u64) = (60, HOUR_SECONDS);
