// ABOUTME: Daily meal aggregation, calendar helpers and history statistics
// ABOUTME: Daily totals, Monday-based week dates, per-day grouping, averages and calorie trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Meal history aggregation
//!
//! A meal belongs to the calendar date of its own timestamp offset: a meal
//! logged at `2026-03-03T00:30:00+01:00` counts towards March 3rd although it
//! is still March 2nd in UTC. Days without meals are skipped by every average.

use super::diet_classifier::{classify_diet, DietType};
use crate::config::intelligence::DietThresholdsConfig;
use chrono::{Datelike, Days, NaiveDate};
use nutrilog_core::constants::physiology::CALORIE_TREND_THRESHOLD_KCAL;
use nutrilog_core::models::Meal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of most recent days compared against the rest of the week
const TREND_RECENT_DAYS: usize = 3;

/// Totals for one calendar date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    /// Calendar date
    pub date: NaiveDate,
    /// Meals eaten on that date
    pub meals: Vec<Meal>,
    /// Sum of calories (kcal)
    pub total_calories: f64,
    /// Sum of protein (g)
    pub total_protein: f64,
    /// Sum of carbohydrates (g)
    pub total_carbs: f64,
    /// Sum of fat (g)
    pub total_fat: f64,
    /// Sum of fiber (g)
    pub total_fiber: f64,
}

impl DailySummary {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
            total_fiber: 0.0,
        }
    }

    fn add(&mut self, meal: &Meal) {
        self.total_calories += meal.calories;
        self.total_protein += meal.protein_g;
        self.total_carbs += meal.carbs_g;
        self.total_fat += meal.fat_g;
        self.total_fiber += meal.fiber_g;
        self.meals.push(meal.clone());
    }
}

/// Direction of recent calorie intake
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CalorieTrend {
    /// Recent days average more than 100 kcal above the earlier days
    Up,
    /// Recent days average more than 100 kcal below the earlier days
    Down,
    /// Within 100 kcal, or not enough data
    Stable,
}

/// Aggregate the meals eaten on `date`
///
/// An empty result has zero sums and no meals.
#[must_use]
pub fn get_daily_summary(meals: &[Meal], date: NaiveDate) -> DailySummary {
    let mut summary = DailySummary::empty(date);
    for meal in meals.iter().filter(|meal| meal.eaten_date() == date) {
        summary.add(meal);
    }
    summary
}

/// `YYYY-MM-DD`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Monday on or before `reference`, followed by the six days after it
///
/// At the edges of the supported calendar the dates clamp to
/// `NaiveDate::MIN` and `NaiveDate::MAX` instead of overflowing.
#[must_use]
pub fn get_week_dates(reference: NaiveDate) -> [NaiveDate; 7] {
    let back = Days::new(u64::from(reference.weekday().num_days_from_monday()));
    let monday = reference.checked_sub_days(back).unwrap_or(NaiveDate::MIN);
    std::array::from_fn(|i| add_days(monday, i))
}

fn add_days(date: NaiveDate, count: usize) -> NaiveDate {
    let days = Days::new(count as u64);
    date.checked_add_days(days).unwrap_or(NaiveDate::MAX)
}

/// The `count` consecutive dates ending at `end`, oldest first
///
/// Dates before `NaiveDate::MIN` are left out, so fewer than `count` dates
/// come back near the start of the calendar.
#[must_use]
pub fn trailing_dates(end: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count)
        .rev()
        .filter_map(|back| end.checked_sub_days(Days::new(back as u64)))
        .collect()
}

/// Meals bucketed by their calendar date, dates ascending
#[must_use]
pub fn group_meals_by_date(meals: &[Meal]) -> BTreeMap<NaiveDate, Vec<&Meal>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Meal>> = BTreeMap::new();
    for meal in meals {
        grouped.entry(meal.eaten_date()).or_default().push(meal);
    }
    grouped
}

fn daily_calories(meals: &[Meal], dates: &[NaiveDate]) -> Vec<f64> {
    let totals: BTreeMap<NaiveDate, f64> = group_meals_by_date(meals)
        .into_iter()
        .map(|(date, day)| (date, day.iter().map(|m| m.calories).sum()))
        .collect();
    dates
        .iter()
        .map(|date| totals.get(date).copied().unwrap_or(0.0))
        .filter(|kcal| *kcal > 0.0)
        .collect()
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Average calories over the given dates that have any intake, rounded
///
/// Returns 0 when none of the dates has data.
#[must_use]
pub fn average_daily_calories(meals: &[Meal], dates: &[NaiveDate]) -> u32 {
    mean(&daily_calories(meals, dates)).map_or(0, |avg| avg.round() as u32)
}

/// Average daily protein, carbohydrate and fat over a period
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AverageMacros {
    /// Protein (g per day)
    pub protein_g: u32,
    /// Carbohydrates (g per day)
    pub carbs_g: u32,
    /// Fat (g per day)
    pub fat_g: u32,
}

impl AverageMacros {
    /// Diet type of the average day
    #[must_use]
    pub fn diet_type(self, thresholds: &DietThresholdsConfig) -> DietType {
        classify_diet(
            f64::from(self.protein_g),
            f64::from(self.carbs_g),
            f64::from(self.fat_g),
            thresholds,
        )
    }
}

/// Average macros over the given dates that logged any macros, each rounded
///
/// A date counts when its protein, carbs and fat sum above zero, so days of
/// calorie-only entries are skipped. All zero when no date has data.
#[must_use]
pub fn average_macros(meals: &[Meal], dates: &[NaiveDate]) -> AverageMacros {
    let days: Vec<DailySummary> = dates
        .iter()
        .map(|date| get_daily_summary(meals, *date))
        .filter(|day| day.total_protein + day.total_carbs + day.total_fat > 0.0)
        .collect();
    if days.is_empty() {
        return AverageMacros::default();
    }

    let count = days.len() as f64;
    let average = |grams: fn(&DailySummary) -> f64| {
        (days.iter().map(grams).sum::<f64>() / count).round() as u32
    };
    AverageMacros {
        protein_g: average(|day| day.total_protein),
        carbs_g: average(|day| day.total_carbs),
        fat_g: average(|day| day.total_fat),
    }
}

/// Compare the last three days of the week ending at `today` with the four before
///
/// Only days with intake count. If either side has no data the trend is
/// `Stable`.
#[must_use]
pub fn calorie_trend(meals: &[Meal], today: NaiveDate) -> CalorieTrend {
    let week = trailing_dates(today, 7);
    let (older_dates, recent_dates) = week.split_at(week.len().saturating_sub(TREND_RECENT_DAYS));

    let (Some(recent), Some(older)) = (
        mean(&daily_calories(meals, recent_dates)),
        mean(&daily_calories(meals, older_dates)),
    ) else {
        return CalorieTrend::Stable;
    };

    let diff = recent - older;
    if diff > CALORIE_TREND_THRESHOLD_KCAL {
        CalorieTrend::Up
    } else if diff < -CALORIE_TREND_THRESHOLD_KCAL {
        CalorieTrend::Down
    } else {
        CalorieTrend::Stable
    }
}

/// Mean AI score of the scored meals, one decimal
///
/// `None` when no meal carries a score.
#[must_use]
pub fn average_meal_score(meals: &[Meal]) -> Option<f64> {
    let scores: Vec<f64> = meals
        .iter()
        .filter_map(|m| m.score.map(f64::from))
        .collect();
    mean(&scores).map(|avg| (avg * 10.0).round() / 10.0)
}
