// ABOUTME: Command implementations for the Nutrilog CLI
// ABOUTME: Validates arguments at the boundary and calls the nutrition engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

use chrono::{NaiveDate, Utc};
use nutrilog::config::intelligence::NutritionConfig;
use nutrilog::errors::{AppError, AppResult};
use nutrilog::intelligence::{
    calculate_calorie_targets, calculate_fat_mass, calculate_lean_mass, classify_diet,
    default_body_fat_goal, format_date, get_body_fat_category, get_macro_percentages,
    get_week_dates, predict_body_fat_goal, predict_weight as project_weight,
};
use nutrilog::models::{ActivityLevel, Gender, Goal, IfProtocol, Profile};
use serde_json::{json, Value};
use uuid::Uuid;

pub fn targets(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    goal: Goal,
) -> AppResult<Value> {
    let profile = Profile {
        id: Uuid::new_v4(),
        name: "cli".to_owned(),
        weight_kg,
        height_cm,
        age,
        gender,
        activity_level,
        goal,
        daily_calorie_target: 0,
        body_fat_percent: None,
        if_enabled: false,
        if_protocol: IfProtocol::default(),
        if_window_start: 0,
        if_window_hours: 0,
    };
    profile.validate()?;

    let targets = calculate_calorie_targets(&profile, NutritionConfig::global());
    Ok(serde_json::to_value(targets)?)
}

pub fn classify(protein_g: f64, carbs_g: f64, fat_g: f64) -> Value {
    let thresholds = &NutritionConfig::global().diet_thresholds;
    json!({
        "diet_type": classify_diet(protein_g, carbs_g, fat_g, thresholds),
        "percentages": get_macro_percentages(protein_g, carbs_g, fat_g),
    })
}

pub fn predict_weight(current_weight: f64, target: f64, intake: f64, days: u32) -> Value {
    json!(project_weight(current_weight, target, intake, days))
}

pub fn body_fat(
    weight_kg: f64,
    body_fat_percent: f64,
    gender: Gender,
    target: Option<f64>,
    deficit: Option<f64>,
) -> AppResult<Value> {
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(AppError::value_out_of_range(
            "weight",
            format!("Weight must be positive, got {weight_kg}"),
        ));
    }
    if !(0.0..=100.0).contains(&body_fat_percent) {
        return Err(AppError::value_out_of_range(
            "body_fat",
            format!("Body fat must be between 0 and 100%, got {body_fat_percent}"),
        ));
    }

    let bands = &NutritionConfig::global().body_fat_bands;
    let target_bf = target.unwrap_or_else(|| default_body_fat_goal(gender));
    let days_to_goal = deficit.and_then(|deficit| {
        predict_body_fat_goal(weight_kg, body_fat_percent, target_bf, deficit)
    });

    Ok(json!({
        "category": get_body_fat_category(body_fat_percent, gender, bands),
        "fat_mass_kg": calculate_fat_mass(weight_kg, body_fat_percent),
        "lean_mass_kg": calculate_lean_mass(weight_kg, body_fat_percent),
        "target_body_fat_percent": deficit.map(|_| target_bf),
        "days_to_goal": days_to_goal,
    }))
}

pub fn week(reference: Option<NaiveDate>) -> Value {
    let reference = reference.unwrap_or_else(|| Utc::now().date_naive());
    let dates: Vec<String> = get_week_dates(reference)
        .into_iter()
        .map(format_date)
        .collect();
    json!({ "reference": format_date(reference), "dates": dates })
}
