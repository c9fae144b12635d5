// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, profile and meal builders, and a manual clock limiter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities for `nutrilog`

use chrono::{DateTime, TimeZone, Utc};
use nutrilog::models::{ActivityLevel, Gender, Goal, IfProtocol, Meal, MealType, Profile};
use nutrilog::rate_limiting::{InMemoryRateLimitStore, ManualClock, RateLimiter};
use std::sync::{Arc, Once};
use std::time::Duration;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 80 kg, 180 cm, 30 year old moderately active male maintaining weight
///
/// BMR = 10*80 + 6.25*180 - 5*30 + 5 = 1780
pub fn male_profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: "Test".to_owned(),
        weight_kg: 80.0,
        height_cm: 180.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
        daily_calorie_target: 2500,
        body_fat_percent: Some(20.0),
        if_enabled: false,
        if_protocol: IfProtocol::SixteenEight,
        if_window_start: 12,
        if_window_hours: 8,
    }
}

/// 65 kg, 165 cm, 28 year old female
///
/// BMR = 10*65 + 6.25*165 - 5*28 - 161 = 1380.25
pub fn female_profile() -> Profile {
    Profile {
        gender: Gender::Female,
        weight_kg: 65.0,
        height_cm: 165.0,
        age: 28,
        ..male_profile()
    }
}

/// Profile following 16:8 with the window opening at `start`
pub fn fasting_profile(start: u8, hours: u8) -> Profile {
    Profile {
        if_enabled: true,
        if_window_start: start,
        if_window_hours: hours,
        ..male_profile()
    }
}

/// Meal at an RFC 3339 timestamp
pub fn meal(
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    fiber_g: f64,
    eaten_at: &str,
) -> Meal {
    Meal {
        id: Uuid::new_v4(),
        name: "Meal".to_owned(),
        meal_type: MealType::Lunch,
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
        eaten_at: DateTime::parse_from_rfc3339(eaten_at).unwrap(),
        score: None,
        in_if_window: true,
    }
}

/// Meal with only calories set
pub fn kcal_meal(calories: f64, eaten_at: &str) -> Meal {
    meal(calories, 0.0, 0.0, 0.0, 0.0, eaten_at)
}

/// Meal with a score
pub fn scored_meal(score: u8, eaten_at: &str) -> Meal {
    Meal {
        score: Some(score),
        ..kcal_meal(500.0, eaten_at)
    }
}

/// Meal flagged as eaten outside the fasting window
pub fn outside_window_meal(eaten_at: &str) -> Meal {
    Meal {
        in_if_window: false,
        ..kcal_meal(500.0, eaten_at)
    }
}

/// Fixed start instant for limiter tests
pub fn test_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 8, 0, 0).unwrap()
}

/// In-memory limiter on a manual clock with the given sweep interval
pub fn manual_limiter(sweep_interval: Duration) -> (RateLimiter, Arc<ManualClock>) {
    init_test_logging();
    let clock = Arc::new(ManualClock::new(test_epoch()));
    let limiter = RateLimiter::new(
        Box::new(InMemoryRateLimitStore::new()),
        clock.clone(),
        sweep_interval,
    );
    (limiter, clock)
}
