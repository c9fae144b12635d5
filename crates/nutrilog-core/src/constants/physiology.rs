// ABOUTME: Physiological constants shared by energy balance and body composition math
// ABOUTME: Macronutrient energy densities, fat energy density, and projection deadbands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Physiological constants
//!
//! References:
//! - Atwater general factors: 4 kcal/g protein, 4 kcal/g carbohydrate, 9 kcal/g fat
//! - Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight.
//!   *American Journal of Clinical Nutrition*, 6(5), 542-546.

/// Energy density of dietary protein (kcal per gram)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of dietary carbohydrate (kcal per gram)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy density of dietary fat (kcal per gram)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Approximate energy stored in one kilogram of body fat (kcal)
///
/// Used by both the weight projection and the body-fat goal projection, so
/// both express their deficit against the same constant.
pub const KCAL_PER_KG_BODY_FAT: f64 = 7700.0;

/// Projected weight change (kg) below which the trend is reported as maintain
pub const WEIGHT_DIRECTION_DEADBAND_KG: f64 = 0.5;

/// Body fat goal (%) assumed for men when projecting days to goal
pub const DEFAULT_BODY_FAT_GOAL_MALE_PERCENT: f64 = 15.0;
/// Body fat goal (%) assumed for women when projecting days to goal
pub const DEFAULT_BODY_FAT_GOAL_FEMALE_PERCENT: f64 = 22.0;

/// Default projection horizon for weight prediction (days)
pub const DEFAULT_PREDICTION_DAYS: u32 = 30;

/// Difference in average daily intake (kcal) that counts as a calorie trend
pub const CALORIE_TREND_THRESHOLD_KCAL: f64 = 100.0;

/// Accepted body weight range for logged measurements (kg)
pub const MEASUREMENT_MIN_WEIGHT_KG: f64 = 20.0;
/// Upper bound of the accepted measurement weight range (kg)
pub const MEASUREMENT_MAX_WEIGHT_KG: f64 = 500.0;

/// Accepted body fat range for logged measurements (%)
pub const MEASUREMENT_MIN_BODY_FAT_PERCENT: f64 = 2.0;
/// Upper bound of the accepted measurement body fat range (%)
pub const MEASUREMENT_MAX_BODY_FAT_PERCENT: f64 = 60.0;

/// Maximum stored length of a measurement note
pub const MEASUREMENT_MAX_NOTE_CHARS: usize = 500;
