// ABOUTME: Body composition metrics from weight and body fat percentage
// ABOUTME: Fat mass, lean mass, body fat categories and a measurement time series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

use crate::config::intelligence::BodyFatBandsConfig;
use chrono::NaiveDate;
use nutrilog_core::models::{BodyMeasurement, Gender};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body fat classification band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    /// Lowest band
    Athletic,
    /// Second band
    Fit,
    /// Third band
    Average,
    /// Above the average band
    Overweight,
}

impl BodyFatCategory {
    /// Wire name of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Athletic => "athletic",
            Self::Fit => "fit",
            Self::Average => "average",
            Self::Overweight => "overweight",
        }
    }
}

impl fmt::Display for BodyFatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dated point of the body composition chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyCompositionPoint {
    /// Measurement date
    pub date: NaiveDate,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body fat (%)
    pub body_fat_percent: f64,
    /// Fat mass (kg, one decimal)
    pub fat_mass_kg: f64,
    /// Lean mass (kg, one decimal)
    pub lean_mass_kg: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Fat mass in kg, rounded to one decimal
#[must_use]
pub fn calculate_fat_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    round1(weight_kg * body_fat_percent / 100.0)
}

/// Lean mass in kg, rounded to one decimal
///
/// Together with [`calculate_fat_mass`] this adds up to the body weight
/// within rounding tolerance.
#[must_use]
pub fn calculate_lean_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    round1(weight_kg * (1.0 - body_fat_percent / 100.0))
}

/// Category for a body fat percentage
///
/// Upper bounds are inclusive: a male at exactly 13% is still athletic.
#[must_use]
pub fn get_body_fat_category(
    body_fat_percent: f64,
    gender: Gender,
    config: &BodyFatBandsConfig,
) -> BodyFatCategory {
    let bands = config.for_gender(gender);
    if body_fat_percent <= bands.athletic_max {
        BodyFatCategory::Athletic
    } else if body_fat_percent <= bands.fit_max {
        BodyFatCategory::Fit
    } else if body_fat_percent <= bands.average_max {
        BodyFatCategory::Average
    } else {
        BodyFatCategory::Overweight
    }
}

/// Date-sorted fat/lean mass series
///
/// Measurements without a body fat value are skipped.
#[must_use]
pub fn body_composition_series(measurements: &[BodyMeasurement]) -> Vec<BodyCompositionPoint> {
    let mut points: Vec<BodyCompositionPoint> = measurements
        .iter()
        .filter_map(|m| {
            m.body_fat_percent.map(|bf| BodyCompositionPoint {
                date: m.date,
                weight_kg: m.weight_kg,
                body_fat_percent: bf,
                fat_mass_kg: calculate_fat_mass(m.weight_kg, bf),
                lean_mass_kg: calculate_lean_mass(m.weight_kg, bf),
            })
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}
