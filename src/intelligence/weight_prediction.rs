// ABOUTME: Weight and body fat projections from sustained calorie balance
// ABOUTME: Linear energy-balance model at roughly 7700 kcal per kg of body fat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Weight projections
//!
//! A deliberately simple linear model: every 7700 kcal of surplus or deficit
//! moves body weight by one kilogram. No metabolic adaptation is modelled.

use nutrilog_core::constants::physiology::{
    DEFAULT_BODY_FAT_GOAL_FEMALE_PERCENT, DEFAULT_BODY_FAT_GOAL_MALE_PERCENT, KCAL_PER_KG_BODY_FAT,
    WEIGHT_DIRECTION_DEADBAND_KG,
};
use nutrilog_core::models::{Gender, Profile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a projected weight change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightDirection {
    /// Projected loss above half a kilogram
    Lose,
    /// Within half a kilogram either way
    Maintain,
    /// Projected gain above half a kilogram
    Gain,
}

impl fmt::Display for WeightDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        })
    }
}

/// Projected weight after a number of days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightPrediction {
    /// Projected weight (kg, one decimal)
    pub predicted_weight: f64,
    /// Direction of the change
    pub direction: WeightDirection,
    /// Unrounded projected change (kg)
    pub weight_change_kg: f64,
}

/// Project body weight from average intake against the daily target
///
/// change = (intake - target) x days / 7700; the prediction is rounded to one
/// decimal. Direction uses a 0.5 kg dead band so noise reads as maintain.
///
/// # Arguments
/// * `current_weight` - Current body weight (kg)
/// * `daily_calorie_target` - The user's daily calorie target (kcal)
/// * `avg_daily_intake` - Observed average daily intake (kcal)
/// * `days` - Projection horizon; callers default to 30
#[must_use]
pub fn predict_weight(
    current_weight: f64,
    daily_calorie_target: f64,
    avg_daily_intake: f64,
    days: u32,
) -> WeightPrediction {
    let daily_diff = avg_daily_intake - daily_calorie_target;
    let weight_change_kg = daily_diff * f64::from(days) / KCAL_PER_KG_BODY_FAT;
    let predicted_weight = ((current_weight + weight_change_kg) * 10.0).round() / 10.0;

    let direction = if weight_change_kg < -WEIGHT_DIRECTION_DEADBAND_KG {
        WeightDirection::Lose
    } else if weight_change_kg > WEIGHT_DIRECTION_DEADBAND_KG {
        WeightDirection::Gain
    } else {
        WeightDirection::Maintain
    };

    WeightPrediction {
        predicted_weight,
        direction,
        weight_change_kg,
    }
}

/// Days needed to reach a target body fat percentage at a daily deficit
///
/// Treats body weight as constant while fat is lost. Returns `None` when
/// there is no deficit or the target is already reached.
///
/// # Arguments
/// * `current_weight` - Current body weight (kg)
/// * `current_bf` - Current body fat (%)
/// * `target_bf` - Target body fat (%)
/// * `daily_deficit` - Daily deficit (kcal, positive means deficit)
#[must_use]
pub fn predict_body_fat_goal(
    current_weight: f64,
    current_bf: f64,
    target_bf: f64,
    daily_deficit: f64,
) -> Option<u32> {
    if daily_deficit <= 0.0 || current_bf <= target_bf {
        return None;
    }
    let fat_to_lose_kg = current_weight * (current_bf - target_bf) / 100.0;
    Some((fat_to_lose_kg * KCAL_PER_KG_BODY_FAT / daily_deficit).ceil() as u32)
}

/// Body fat goal used when the user has not chosen one (%)
#[must_use]
pub const fn default_body_fat_goal(gender: Gender) -> f64 {
    match gender {
        Gender::Male => DEFAULT_BODY_FAT_GOAL_MALE_PERCENT,
        Gender::Female => DEFAULT_BODY_FAT_GOAL_FEMALE_PERCENT,
    }
}

/// Days to the default body fat goal at the observed intake
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyFatGoalProjection {
    /// Goal the projection runs towards (%)
    pub target_body_fat_percent: f64,
    /// TDEE minus average intake (kcal)
    pub daily_deficit: f64,
    /// Whole days until the goal is reached
    pub days_to_goal: u32,
}

/// Project the days a profile needs to reach its default body fat goal
///
/// The deficit is `tdee - avg_daily_intake`, where the average normally
/// covers the last seven days with intake. Returns `None` when the profile
/// has no body fat reading, when there is no intake data (an average of 0),
/// when intake does not undercut TDEE, or when the goal is already reached.
#[must_use]
pub fn project_body_fat_goal(
    profile: &Profile,
    tdee: f64,
    avg_daily_intake: f64,
) -> Option<BodyFatGoalProjection> {
    let current_bf = profile.body_fat_percent?;
    if avg_daily_intake <= 0.0 {
        return None;
    }

    let target_bf = default_body_fat_goal(profile.gender);
    let daily_deficit = tdee - avg_daily_intake;
    let days_to_goal = predict_body_fat_goal(
        profile.weight_kg,
        current_bf,
        target_bf,
        daily_deficit,
    )?;

    Some(BodyFatGoalProjection {
        target_body_fat_percent: target_bf,
        daily_deficit,
        days_to_goal,
    })
}
