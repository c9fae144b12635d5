// ABOUTME: Integration tests for weight and body fat projections
// ABOUTME: Direction dead band, one-decimal rounding and days-to-goal edge cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use common::{female_profile, male_profile};
use nutrilog::intelligence::{
    default_body_fat_goal, predict_body_fat_goal, predict_weight, project_body_fat_goal,
    WeightDirection,
};
use nutrilog::models::{Gender, Profile};

#[test]
fn test_deficit_predicts_loss() {
    // 500 kcal/day * 30 = 15000 kcal / 7700 = ~1.95 kg
    let prediction = predict_weight(80.0, 2500.0, 2000.0, 30);
    assert_eq!(prediction.direction, WeightDirection::Lose);
    assert!(prediction.predicted_weight < 80.0);
    assert_eq!(prediction.predicted_weight, 78.1);
}

#[test]
fn test_balance_predicts_maintain() {
    let prediction = predict_weight(80.0, 2500.0, 2500.0, 30);
    assert_eq!(prediction.direction, WeightDirection::Maintain);
    assert_eq!(prediction.predicted_weight, 80.0);
    assert_eq!(prediction.weight_change_kg, 0.0);
}

#[test]
fn test_surplus_predicts_gain() {
    let prediction = predict_weight(70.0, 2200.0, 2700.0, 30);
    assert_eq!(prediction.direction, WeightDirection::Gain);
    assert!(prediction.predicted_weight > 70.0);
}

#[test]
fn test_small_changes_fall_in_dead_band() {
    // 100 kcal/day * 30 = 3000 kcal = 0.39 kg
    let surplus = predict_weight(80.0, 2000.0, 2100.0, 30);
    assert_eq!(surplus.direction, WeightDirection::Maintain);
    assert_eq!(surplus.predicted_weight, 80.4);

    let deficit = predict_weight(80.0, 2100.0, 2000.0, 30);
    assert_eq!(deficit.direction, WeightDirection::Maintain);
}

#[test]
fn test_zero_days_changes_nothing() {
    let prediction = predict_weight(80.0, 2500.0, 1500.0, 0);
    assert_eq!(prediction.direction, WeightDirection::Maintain);
    assert_eq!(prediction.predicted_weight, 80.0);
}

#[test]
fn test_body_fat_goal_days() {
    // 80 kg * 10% = 8 kg of fat * 7700 = 61600 kcal / 500 = 123.2 -> 124
    assert_eq!(predict_body_fat_goal(80.0, 25.0, 15.0, 500.0), Some(124));
}

#[test]
fn test_body_fat_goal_without_deficit() {
    assert_eq!(predict_body_fat_goal(80.0, 25.0, 15.0, 0.0), None);
    assert_eq!(predict_body_fat_goal(80.0, 25.0, 15.0, -200.0), None);
}

#[test]
fn test_body_fat_goal_already_reached() {
    assert_eq!(predict_body_fat_goal(80.0, 15.0, 15.0, 500.0), None);
    assert_eq!(predict_body_fat_goal(80.0, 12.0, 15.0, 500.0), None);
}

#[test]
fn test_direction_wire_names() {
    assert_eq!(
        serde_json::to_string(&WeightDirection::Lose).unwrap(),
        "\"lose\""
    );
    assert_eq!(WeightDirection::Maintain.to_string(), "maintain");
}

#[test]
fn test_default_body_fat_goals() {
    assert_eq!(default_body_fat_goal(Gender::Male), 15.0);
    assert_eq!(default_body_fat_goal(Gender::Female), 22.0);
}

#[test]
fn test_body_fat_goal_projection_from_intake() {
    // 80 kg at 20% -> 15%: 4 kg of fat, 30800 kcal at a 500 kcal deficit
    let projection = project_body_fat_goal(&male_profile(), 2500.0, 2000.0).unwrap();
    assert_eq!(projection.target_body_fat_percent, 15.0);
    assert_eq!(projection.daily_deficit, 500.0);
    assert_eq!(projection.days_to_goal, 62);

    // 65 kg at 28% -> 22%: 3.9 kg of fat, 30030 kcal at a 400 kcal deficit
    let female = Profile {
        body_fat_percent: Some(28.0),
        ..female_profile()
    };
    let projection = project_body_fat_goal(&female, 2000.0, 1600.0).unwrap();
    assert_eq!(projection.target_body_fat_percent, 22.0);
    assert_eq!(projection.days_to_goal, 76);
}

#[test]
fn test_body_fat_goal_projection_needs_data_and_deficit() {
    let profile = male_profile();
    // No intake logged
    assert!(project_body_fat_goal(&profile, 2500.0, 0.0).is_none());
    // Eating at or above TDEE
    assert!(project_body_fat_goal(&profile, 2500.0, 2500.0).is_none());

    let no_reading = Profile {
        body_fat_percent: None,
        ..male_profile()
    };
    assert!(project_body_fat_goal(&no_reading, 2500.0, 2000.0).is_none());

    // Female default goal is 22%, so 20% is already there
    let lean_female = Profile {
        body_fat_percent: Some(20.0),
        ..female_profile()
    };
    assert!(project_body_fat_goal(&lean_female, 2000.0, 1500.0).is_none());
}
