// ABOUTME: Per-user, per-operation fixed-window rate limiter guarding costly AI calls
// ABOUTME: Injected store and clock, atomic check-then-increment, opportunistic sweep of stale entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! # Rate Limiting
//!
//! Fixed-window admission control keyed by `"{user_id}:{operation}"`. A window
//! opens with the first request after the previous one expired and admits up
//! to `limit` requests until `reset_at`. Denial is a normal decision carrying
//! the seconds until the window resets; the limiter itself never fails.
//!
//! State lives in a [`RateLimitStore`] injected at construction. The default
//! [`InMemoryRateLimitStore`] has process lifetime, so a restart resets every
//! counter, and separate processes do not share counters. Time comes from a
//! [`Clock`] so tests can step over window boundaries deterministically.
//!
//! Requests straddling a window boundary can admit up to twice the limit in
//! a short span. That burst is accepted.

use crate::config::environment::ServerConfig;
use chrono::{DateTime, Utc};
use nutrilog_core::constants::rate_limits;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

/// Limit and window length for one operation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Requests admitted per window
    pub limit: u32,
    /// Window length in seconds
    pub window_seconds: u64,
}

impl RateLimitConfig {
    /// Create a new limit
    #[must_use]
    pub const fn new(limit: u32, window_seconds: u64) -> Self {
        Self {
            limit,
            window_seconds,
        }
    }

    const fn from_table(entry: (u32, u64)) -> Self {
        Self::new(entry.0, entry.1)
    }
}

/// Counter state of one key
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitEntry {
    /// Requests admitted in the current window
    pub count: u32,
    /// End of the current window
    pub reset_at: DateTime<Utc>,
}

impl RateLimitEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.reset_at
    }
}

/// Outcome of a rate limit check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request is admitted
    pub allowed: bool,
    /// Requests admitted per window
    pub limit: u32,
    /// Admissions left in the current window
    pub remaining: u32,
    /// Seconds until the window resets; 0 when admitted
    pub retry_after_seconds: u64,
}

/// Operations guarded by the fixed limit table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RateLimitedOperation {
    /// Meal photo analysis (vision model)
    Analyze,
    /// AI meal scoring
    Score,
    /// AI weekly report
    WeeklyReport,
    /// Meal history reads
    MealsRead,
    /// Meal creation and updates
    MealsWrite,
    /// Meal deletion
    MealsDelete,
    /// Profile reads
    ProfileRead,
    /// Profile updates
    ProfileWrite,
    /// Body measurement reads and writes
    Measurements,
    /// Meal template reads and writes
    Templates,
}

impl RateLimitedOperation {
    /// Every operation of the table
    pub const ALL: [Self; 10] = [
        Self::Analyze,
        Self::Score,
        Self::WeeklyReport,
        Self::MealsRead,
        Self::MealsWrite,
        Self::MealsDelete,
        Self::ProfileRead,
        Self::ProfileWrite,
        Self::Measurements,
        Self::Templates,
    ];

    /// Operation name used in store keys and error details
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analyze => "analyze",
            Self::Score => "score",
            Self::WeeklyReport => "weekly_report",
            Self::MealsRead => "meals_read",
            Self::MealsWrite => "meals_write",
            Self::MealsDelete => "meals_delete",
            Self::ProfileRead => "profile_read",
            Self::ProfileWrite => "profile_write",
            Self::Measurements => "measurements",
            Self::Templates => "templates",
        }
    }

    /// Fixed limit for the operation
    #[must_use]
    pub const fn config(self) -> RateLimitConfig {
        RateLimitConfig::from_table(match self {
            Self::Analyze => rate_limits::ANALYZE,
            Self::Score => rate_limits::SCORE,
            Self::WeeklyReport => rate_limits::WEEKLY_REPORT,
            Self::MealsRead => rate_limits::MEALS_READ,
            Self::MealsWrite => rate_limits::MEALS_WRITE,
            Self::MealsDelete => rate_limits::MEALS_DELETE,
            Self::ProfileRead => rate_limits::PROFILE_READ,
            Self::ProfileWrite => rate_limits::PROFILE_WRITE,
            Self::Measurements => rate_limits::MEASUREMENTS,
            Self::Templates => rate_limits::TEMPLATES,
        })
    }

    /// Whether the operation calls a paid AI model
    #[must_use]
    pub const fn is_ai_backed(self) -> bool {
        matches!(self, Self::Analyze | Self::Score | Self::WeeklyReport)
    }
}

impl fmt::Display for RateLimitedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backing storage for rate limit counters
///
/// Implementations need not be thread-safe on their own: the limiter
/// serialises every access behind its mutex.
pub trait RateLimitStore: Send {
    /// Entry for a key
    fn get(&self, key: &str) -> Option<RateLimitEntry>;

    /// Insert or replace the entry for a key
    fn set(&mut self, key: String, entry: RateLimitEntry);

    /// Remove a key, returning whether it existed
    fn delete(&mut self, key: &str) -> bool;

    /// All tracked keys
    fn keys(&self) -> Vec<String>;
}

/// Process-local `HashMap` store
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    entries: HashMap<String, RateLimitEntry>,
}

impl InMemoryRateLimitStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    fn get(&self, key: &str) -> Option<RateLimitEntry> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: String, entry: RateLimitEntry) {
        self.entries.insert(key, entry);
    }

    fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Clock frozen at `start`
    #[must_use]
    pub const fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, time: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = time;
    }

    /// Move forward by `by`
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        let delta = chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
        let next = now.checked_add_signed(delta);
        *now = next.unwrap_or(DateTime::<Utc>::MAX_UTC);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct LimiterState {
    store: Box<dyn RateLimitStore>,
    last_sweep: DateTime<Utc>,
}

impl LimiterState {
    fn sweep(&mut self, now: DateTime<Utc>) -> usize {
        let expired: Vec<String> = self
            .store
            .keys()
            .into_iter()
            .filter(|key| self.store.get(key).is_some_and(|e| e.is_expired(now)))
            .collect();

        let removed = expired.iter().filter(|key| self.store.delete(key)).count();
        self.last_sweep = now;

        if removed > 0 {
            debug!(removed, "Swept expired rate limit entries");
        }
        removed
    }
}

/// Fixed-window rate limiter
pub struct RateLimiter {
    state: Mutex<LimiterState>,
    clock: Arc<dyn Clock>,
    sweep_interval: Duration,
}

impl fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateLimiter")
            .field("sweep_interval", &self.sweep_interval)
            .finish_non_exhaustive()
    }
}

fn storage_key(user_id: &str, operation: &str) -> String {
    format!("{user_id}:{operation}")
}

fn window_end(now: DateTime<Utc>, window_seconds: u64) -> DateTime<Utc> {
    let window_ms = i64::try_from(window_seconds)
        .unwrap_or(i64::MAX)
        .saturating_mul(1000);
    let end = now.checked_add_signed(chrono::Duration::milliseconds(window_ms));
    end.unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn seconds_until(reset_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (reset_at - now).num_milliseconds();
    u64::try_from(millis).unwrap_or(0).div_ceil(1000)
}

impl RateLimiter {
    /// Create a limiter over an injected store and clock
    ///
    /// `sweep_interval` is the minimum time between opportunistic sweeps of
    /// expired entries; the first sweep happens one interval after
    /// construction.
    #[must_use]
    pub fn new(
        store: Box<dyn RateLimitStore>,
        clock: Arc<dyn Clock>,
        sweep_interval: Duration,
    ) -> Self {
        let last_sweep = clock.now();
        Self {
            state: Mutex::new(LimiterState { store, last_sweep }),
            clock,
            sweep_interval,
        }
    }

    /// In-memory limiter on the wall clock, configured from the environment
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            Box::new(InMemoryRateLimitStore::new()),
            Arc::new(SystemClock),
            config.rate_limiting.sweep_interval(),
        )
    }

    /// Check and record one request
    ///
    /// The clock is read, and the entry looked up and incremented, under one
    /// lock, so concurrent callers can never admit more than `limit` requests
    /// per window and a later caller never records an earlier time.
    pub fn check(
        &self,
        user_id: &str,
        operation: &str,
        config: &RateLimitConfig,
    ) -> RateLimitDecision {
        if config.limit == 0 {
            warn!(user_id, operation, "Zero limit configured; request denied");
            return RateLimitDecision {
                allowed: false,
                limit: 0,
                remaining: 0,
                retry_after_seconds: config.window_seconds,
            };
        }

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let now = self.clock.now();

        let since_sweep = (now - state.last_sweep).to_std().unwrap_or_default();
        if since_sweep >= self.sweep_interval {
            state.sweep(now);
        }

        let key = storage_key(user_id, operation);
        match state.store.get(&key) {
            Some(entry) if !entry.is_expired(now) => {
                if entry.count < config.limit {
                    let count = entry.count + 1;
                    state.store.set(
                        key,
                        RateLimitEntry {
                            count,
                            reset_at: entry.reset_at,
                        },
                    );
                    debug!(
                        user_id,
                        operation,
                        count,
                        limit = config.limit,
                        "Request admitted"
                    );
                    RateLimitDecision {
                        allowed: true,
                        limit: config.limit,
                        remaining: config.limit - count,
                        retry_after_seconds: 0,
                    }
                } else {
                    let retry_after_seconds = seconds_until(entry.reset_at, now);
                    warn!(
                        user_id,
                        operation,
                        limit = config.limit,
                        retry_after_seconds,
                        "Rate limit exceeded"
                    );
                    RateLimitDecision {
                        allowed: false,
                        limit: config.limit,
                        remaining: 0,
                        retry_after_seconds,
                    }
                }
            }
            _ => {
                state.store.set(
                    key,
                    RateLimitEntry {
                        count: 1,
                        reset_at: window_end(now, config.window_seconds),
                    },
                );
                debug!(
                    user_id,
                    operation,
                    limit = config.limit,
                    "Rate limit window opened"
                );
                RateLimitDecision {
                    allowed: true,
                    limit: config.limit,
                    remaining: config.limit - 1,
                    retry_after_seconds: 0,
                }
            }
        }
    }

    /// Check a request against the fixed operation table
    pub fn check_operation(
        &self,
        user_id: &str,
        operation: RateLimitedOperation,
    ) -> RateLimitDecision {
        self.check(user_id, operation.as_str(), &operation.config())
    }

    /// Remove every expired entry now, returning how many were removed
    pub fn sweep(&self) -> usize {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let now = self.clock.now();
        state.sweep(now)
    }

    /// Number of keys currently tracked
    #[must_use]
    pub fn tracked_keys(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .store
            .keys()
            .len()
    }
}
