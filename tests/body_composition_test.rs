// ABOUTME: Integration tests for body composition metrics
// ABOUTME: Fat and lean mass rounding, category band boundaries and the measurement series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

use chrono::NaiveDate;
use nutrilog::config::intelligence::BodyFatBandsConfig;
use nutrilog::intelligence::{
    body_composition_series, calculate_fat_mass, calculate_lean_mass, get_body_fat_category,
    BodyFatCategory,
};
use nutrilog::models::{BodyMeasurement, Gender};
use uuid::Uuid;

fn category(body_fat: f64, gender: Gender) -> BodyFatCategory {
    get_body_fat_category(body_fat, gender, &BodyFatBandsConfig::default())
}

fn measurement(date: &str, weight_kg: f64, body_fat_percent: Option<f64>) -> BodyMeasurement {
    BodyMeasurement {
        id: Uuid::new_v4(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        weight_kg,
        body_fat_percent,
        notes: None,
    }
}

#[test]
fn test_fat_and_lean_mass() {
    assert_eq!(calculate_fat_mass(80.0, 20.0), 16.0);
    assert_eq!(calculate_lean_mass(80.0, 20.0), 64.0);
}

#[test]
fn test_masses_rounded_to_one_decimal() {
    assert_eq!(calculate_fat_mass(73.3, 17.0), 12.5);
    assert_eq!(calculate_lean_mass(73.3, 17.0), 60.8);
}

#[test]
fn test_masses_sum_to_weight_within_rounding() {
    for (weight, body_fat) in [(80.0, 20.0), (73.3, 17.0), (95.7, 31.4), (58.2, 22.9)] {
        let total = calculate_fat_mass(weight, body_fat) + calculate_lean_mass(weight, body_fat);
        assert!(
            (total - weight).abs() <= 0.1 + 1e-9,
            "{weight} kg at {body_fat}% gave {total}"
        );
    }
}

#[test]
fn test_male_category_bounds_are_inclusive() {
    assert_eq!(category(13.0, Gender::Male), BodyFatCategory::Athletic);
    assert_eq!(category(13.1, Gender::Male), BodyFatCategory::Fit);
    assert_eq!(category(17.0, Gender::Male), BodyFatCategory::Fit);
    assert_eq!(category(24.0, Gender::Male), BodyFatCategory::Average);
    assert_eq!(category(24.1, Gender::Male), BodyFatCategory::Overweight);
}

#[test]
fn test_female_category_bounds_are_inclusive() {
    assert_eq!(category(20.0, Gender::Female), BodyFatCategory::Athletic);
    assert_eq!(category(24.0, Gender::Female), BodyFatCategory::Fit);
    assert_eq!(category(31.0, Gender::Female), BodyFatCategory::Average);
    assert_eq!(category(31.5, Gender::Female), BodyFatCategory::Overweight);
}

#[test]
fn test_category_is_monotonic() {
    let mut previous = BodyFatCategory::Athletic;
    for tenth in 0..=600 {
        let current = category(f64::from(tenth) / 10.0, Gender::Male);
        assert!(current >= previous);
        previous = current;
    }
    assert_eq!(category(0.0, Gender::Female), BodyFatCategory::Athletic);
}

#[test]
fn test_series_sorted_and_skips_missing_body_fat() {
    let measurements = vec![
        measurement("2026-02-10", 79.0, Some(19.0)),
        measurement("2026-02-01", 80.0, Some(20.0)),
        measurement("2026-02-05", 79.5, None),
    ];

    let series = body_composition_series(&measurements);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    assert_eq!(series[0].fat_mass_kg, 16.0);
    assert_eq!(series[1].lean_mass_kg, 64.0);
}

#[test]
fn test_series_of_nothing_is_empty() {
    assert!(body_composition_series(&[]).is_empty());
}
