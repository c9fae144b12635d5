// ABOUTME: Nutrition engine: stateless calculations over profiles, meals and measurements
// ABOUTME: Re-exports the calculator, classifier, projections, summaries and fasting helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! # Nutrition Engine
//!
//! Pure functions computing energy expenditure, calorie targets, body
//! composition, diet classification, weight and body fat projections, daily
//! summaries and intermittent fasting statistics.
//!
//! Nothing here performs I/O or holds state, and nothing returns an error:
//! inputs are validated where they enter the system (`Profile::validate`,
//! `BodyMeasurement::validate`, the `FromStr` impls of the model enums).
//! Coefficients come from [`crate::config::intelligence::NutritionConfig`].

/// Body fat categories, fat and lean mass
pub mod body_composition;
/// Ordered rule list classifying a day's macros
pub mod diet_classifier;
/// Eating window checks and compliance statistics
pub mod fasting;
/// Daily totals, calendar helpers and history statistics
pub mod meal_summary;
/// BMR, TDEE, calorie and macro targets
pub mod nutrition_calculator;
/// Energy-balance weight and body fat projections
pub mod weight_prediction;

pub use body_composition::{
    body_composition_series, calculate_fat_mass, calculate_lean_mass, get_body_fat_category,
    BodyCompositionPoint, BodyFatCategory,
};
pub use diet_classifier::{
    classify_diet, classify_diet_with_rules, DietRule, DietType, DIET_RULES,
};
pub use fasting::{
    calculate_if_compliance, fasting_status, format_eating_window, is_in_eating_window,
    meal_in_eating_window, FastingSchedule, FastingStatus, IfComplianceStats,
};
pub use meal_summary::{
    average_daily_calories, average_macros, average_meal_score, calorie_trend, format_date,
    get_daily_summary, get_week_dates, group_meals_by_date, trailing_dates, AverageMacros,
    CalorieTrend, DailySummary,
};
pub use nutrition_calculator::{
    calculate_bmr, calculate_calorie_target, calculate_calorie_targets, calculate_tdee,
    get_macro_percentages, get_macro_targets, CalorieTargets, MacroBreakdown, MacroPercentages,
    MacroTargets,
};
pub use weight_prediction::{
    default_body_fat_goal, predict_body_fat_goal, predict_weight, project_body_fat_goal,
    BodyFatGoalProjection, WeightDirection, WeightPrediction,
};
