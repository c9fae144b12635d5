// ABOUTME: Energy expenditure and macro calculations using the Mifflin-St Jeor formula
// ABOUTME: BMR, TDEE, goal-adjusted calorie targets, macro percentages and macro gram targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Nutrition Calculator Module
//!
//! Energy expenditure and macronutrient math for a user profile. Every
//! function here is pure and total: the profile is validated at the boundary
//! (`Profile::validate`) before it reaches the engine.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, MacroSplitConfig, NutritionConfig,
};
use nutrilog_core::constants::physiology::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutrilog_core::models::{Goal, Profile};
use serde::{Deserialize, Serialize};

/// Macronutrient share of total energy, each rounded to a whole percent
///
/// The three values are rounded independently and may not sum to 100.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein: u32,
    /// Carbohydrates as percentage of total calories
    pub carbs: u32,
    /// Fat as percentage of total calories
    pub fat: u32,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Protein target (g)
    pub protein_target_g: u32,
    /// Carbohydrate target (g)
    pub carbs_target_g: u32,
    /// Fat target (g)
    pub fat_target_g: u32,
}

/// Unrounded energy shares of the three macros (%)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    /// Protein share of total kcal
    pub protein_percent: f64,
    /// Carbohydrate share of total kcal
    pub carbs_percent: f64,
    /// Fat share of total kcal
    pub fat_percent: f64,
}

impl MacroBreakdown {
    /// Energy shares for the given grams
    ///
    /// Returns `None` when the macros carry no energy at all, so callers never
    /// divide by zero.
    #[must_use]
    pub fn from_grams(protein_g: f64, carbs_g: f64, fat_g: f64) -> Option<Self> {
        let protein_kcal = protein_g * KCAL_PER_GRAM_PROTEIN;
        let carbs_kcal = carbs_g * KCAL_PER_GRAM_CARBS;
        let fat_kcal = fat_g * KCAL_PER_GRAM_FAT;
        let total = protein_kcal + carbs_kcal + fat_kcal;

        if total == 0.0 {
            return None;
        }

        Some(Self {
            protein_percent: protein_kcal / total * 100.0,
            carbs_percent: carbs_kcal / total * 100.0,
            fat_percent: fat_kcal / total * 100.0,
        })
    }
}

/// Everything the app derives from a profile in one pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieTargets {
    /// Basal Metabolic Rate (kcal/day, unrounded)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i32,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub calorie_target: i32,
    /// Macro gram targets for the calorie target
    pub macro_targets: MacroTargets,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor formula
///
/// Formula:
/// - Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
/// - Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161
///
/// The result is not rounded.
///
/// # Arguments
/// * `profile` - Validated user profile
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(profile: &Profile, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    weight_component + height_component + age_component + config.gender_constant(profile.gender)
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = round(BMR x Activity Factor)
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
#[must_use]
pub fn calculate_tdee(
    profile: &Profile,
    bmr_config: &BmrConfig,
    activity_factors: &ActivityFactorsConfig,
) -> i32 {
    let bmr = calculate_bmr(profile, bmr_config);
    (bmr * activity_factors.factor(profile.activity_level)).round() as i32
}

/// Daily calorie target: TDEE shifted by the goal adjustment
///
/// lose: TDEE - 500, maintain: TDEE, gain: TDEE + 300
#[must_use]
pub fn calculate_calorie_target(profile: &Profile, config: &NutritionConfig) -> i32 {
    let tdee = calculate_tdee(profile, &config.bmr, &config.activity_factors);
    tdee + config.goal_adjustments.adjustment(profile.goal)
}

/// Share of total energy for each macro, rounded independently
///
/// All-zero input yields 0/0/0.
#[must_use]
pub fn get_macro_percentages(protein_g: f64, carbs_g: f64, fat_g: f64) -> MacroPercentages {
    let Some(breakdown) = MacroBreakdown::from_grams(protein_g, carbs_g, fat_g) else {
        return MacroPercentages::default();
    };

    MacroPercentages {
        protein: breakdown.protein_percent.round() as u32,
        carbs: breakdown.carbs_percent.round() as u32,
        fat: breakdown.fat_percent.round() as u32,
    }
}

/// Gram targets for a calorie target using the goal's macro split
///
/// grams = kcal share / 4 for protein and carbs, / 9 for fat, each rounded.
/// A negative calorie target saturates to zero grams.
#[must_use]
pub fn get_macro_targets(
    calorie_target: i32,
    goal: Goal,
    splits: &MacroSplitConfig,
) -> MacroTargets {
    let split = splits.for_goal(goal);
    let kcal = f64::from(calorie_target);

    MacroTargets {
        protein_target_g: macro_grams(kcal, split.protein_pct, KCAL_PER_GRAM_PROTEIN),
        carbs_target_g: macro_grams(kcal, split.carbs_pct, KCAL_PER_GRAM_CARBS),
        fat_target_g: macro_grams(kcal, split.fat_pct, KCAL_PER_GRAM_FAT),
    }
}

fn macro_grams(kcal: f64, percent: u8, kcal_per_gram: f64) -> u32 {
    (kcal * f64::from(percent) / 100.0 / kcal_per_gram).round() as u32
}

/// BMR, TDEE, calorie target and macro targets for a profile
#[must_use]
pub fn calculate_calorie_targets(profile: &Profile, config: &NutritionConfig) -> CalorieTargets {
    let calorie_target = calculate_calorie_target(profile, config);
    CalorieTargets {
        bmr: calculate_bmr(profile, &config.bmr),
        tdee: calculate_tdee(profile, &config.bmr, &config.activity_factors),
        calorie_target,
        macro_targets: get_macro_targets(calorie_target, profile.goal, &config.macro_splits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_none_for_zero_energy() {
        assert!(MacroBreakdown::from_grams(0.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_breakdown_shares_sum_to_100() {
        let breakdown = MacroBreakdown::from_grams(30.0, 50.0, 20.0);
        let total = breakdown.map_or(0.0, |b| b.protein_percent + b.carbs_percent + b.fat_percent);
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_targets_negative_calories_saturate() {
        let targets = get_macro_targets(-100, Goal::Lose, &MacroSplitConfig::default());
        assert_eq!(targets.protein_target_g, 0);
        assert_eq!(targets.fat_target_g, 0);
    }
}
