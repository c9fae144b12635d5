// ABOUTME: Integration tests for BMR, TDEE, calorie target and macro calculations
// ABOUTME: Checks exact Mifflin-St Jeor values, goal adjustments and macro rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use common::{female_profile, male_profile};
use nutrilog::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, MacroSplitConfig, NutritionConfig,
};
use nutrilog::intelligence::{
    calculate_bmr, calculate_calorie_target, calculate_calorie_targets, calculate_tdee,
    get_macro_percentages, get_macro_targets, MacroPercentages,
};
use nutrilog::models::{ActivityLevel, Goal, Profile};

fn tdee(profile: &Profile) -> i32 {
    calculate_tdee(
        profile,
        &BmrConfig::default(),
        &ActivityFactorsConfig::default(),
    )
}

#[test]
fn test_bmr_male_mifflin_st_jeor() {
    assert_eq!(
        calculate_bmr(&male_profile(), &BmrConfig::default()),
        1780.0
    );
}

#[test]
fn test_bmr_female_mifflin_st_jeor() {
    assert_eq!(
        calculate_bmr(&female_profile(), &BmrConfig::default()),
        1380.25
    );
}

#[test]
fn test_tdee_applies_activity_multiplier() {
    assert_eq!(tdee(&male_profile()), (1780.0_f64 * 1.55).round() as i32);

    let sedentary = Profile {
        activity_level: ActivityLevel::Sedentary,
        ..male_profile()
    };
    assert_eq!(tdee(&sedentary), 2136);
}

#[test]
fn test_tdee_increases_with_activity_level() {
    let values: Vec<i32> = ActivityLevel::ALL
        .iter()
        .map(|level| {
            tdee(&Profile {
                activity_level: *level,
                ..male_profile()
            })
        })
        .collect();
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_calorie_target_per_goal() {
    let config = NutritionConfig::default();
    let base = tdee(&male_profile());

    assert_eq!(calculate_calorie_target(&male_profile(), &config), base);

    let lose = Profile {
        goal: Goal::Lose,
        ..male_profile()
    };
    assert_eq!(calculate_calorie_target(&lose, &config), base - 500);

    let gain = Profile {
        goal: Goal::Gain,
        ..male_profile()
    };
    assert_eq!(calculate_calorie_target(&gain, &config), base + 300);
}

#[test]
fn test_calorie_target_uses_configured_adjustment() {
    let mut config = NutritionConfig::default();
    config.goal_adjustments.lose_kcal = -750;
    let lose = Profile {
        goal: Goal::Lose,
        ..male_profile()
    };
    assert_eq!(calculate_calorie_target(&lose, &config), tdee(&lose) - 750);
}

#[test]
fn test_macro_percentages_rounded_independently() {
    // 100 g protein = 400 kcal, 100 g carbs = 400 kcal, 100 g fat = 900 kcal
    let percentages = get_macro_percentages(100.0, 100.0, 100.0);
    assert_eq!(
        percentages,
        MacroPercentages {
            protein: 24,
            carbs: 24,
            fat: 53,
        }
    );
    // Independent rounding is not corrected back to 100
    assert_eq!(
        percentages.protein + percentages.carbs + percentages.fat,
        101
    );
}

#[test]
fn test_macro_percentages_all_zero() {
    assert_eq!(
        get_macro_percentages(0.0, 0.0, 0.0),
        MacroPercentages::default()
    );
}

#[test]
fn test_macro_targets_for_each_goal() {
    let splits = MacroSplitConfig::default();

    let lose = get_macro_targets(2000, Goal::Lose, &splits);
    assert_eq!(lose.protein_target_g, 150);
    assert_eq!(lose.carbs_target_g, 200);
    assert_eq!(lose.fat_target_g, 67);

    let maintain = get_macro_targets(2000, Goal::Maintain, &splits);
    assert_eq!(maintain.protein_target_g, 125);
    assert_eq!(maintain.carbs_target_g, 225);
    assert_eq!(maintain.fat_target_g, 67);

    let gain = get_macro_targets(2000, Goal::Gain, &splits);
    assert_eq!(gain.protein_target_g, 125);
    assert_eq!(gain.carbs_target_g, 250);
    assert_eq!(gain.fat_target_g, 56);
}

#[test]
fn test_calorie_targets_bundle_is_consistent() {
    let config = NutritionConfig::default();
    let profile = Profile {
        goal: Goal::Lose,
        ..male_profile()
    };

    let targets = calculate_calorie_targets(&profile, &config);
    assert_eq!(targets.bmr, 1780.0);
    assert_eq!(targets.tdee, tdee(&profile));
    assert_eq!(targets.calorie_target, targets.tdee - 500);
    assert_eq!(
        targets.macro_targets,
        get_macro_targets(targets.calorie_target, Goal::Lose, &config.macro_splits)
    );
}
