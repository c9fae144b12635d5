// ABOUTME: Meal record with macro estimates, AI score, and fasting-window flag
// ABOUTME: MealType definitions and the calendar-date bucketing of meal timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast
    Breakfast,
    /// Lunch
    #[default]
    Lunch,
    /// Dinner
    Dinner,
    /// Snack between meals
    Snack,
}

/// Logged meal with nutrition estimates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    /// Meal identifier
    pub id: Uuid,
    /// Short meal name
    #[serde(default)]
    pub name: String,
    /// Meal slot
    #[serde(default)]
    pub meal_type: MealType,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Fiber (grams)
    #[serde(default)]
    pub fiber_g: f64,
    /// When the meal was eaten, in the user's local offset
    pub eaten_at: DateTime<FixedOffset>,
    /// AI score from 1 to 10, if the meal has been scored
    #[serde(default)]
    pub score: Option<u8>,
    /// Whether the meal was eaten inside the fasting eating window
    #[serde(default = "default_in_window")]
    pub in_if_window: bool,
}

const fn default_in_window() -> bool {
    true
}

impl Meal {
    /// Calendar date the meal belongs to
    ///
    /// The date is taken in the timestamp's own offset, so a meal at 23:30
    /// local time is never moved to the next day by a UTC conversion.
    #[must_use]
    pub fn eaten_date(&self) -> NaiveDate {
        self.eaten_at.date_naive()
    }
}
