// ABOUTME: Diet classification from macro energy shares using an ordered rule list
// ABOUTME: First matching rule wins: keto, low carb, high protein, low fat, high carb, else balanced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Diet classification
//!
//! Rules are evaluated in order and the first match wins, so a day that is
//! both keto and high protein is reported as keto. The rule list is plain
//! data so the ordering can be inspected and tested directly.

use super::nutrition_calculator::MacroBreakdown;
use crate::config::intelligence::DietThresholdsConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diet pattern inferred from macro shares
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Fat above 65% and carbs below 10%
    Keto,
    /// Carbs below 25%
    LowCarb,
    /// Protein above 30%
    HighProtein,
    /// Fat below 20%
    LowFat,
    /// Carbs above 60%
    HighCarb,
    /// None of the above
    Balanced,
}

impl DietType {
    /// Wire name of the diet type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keto => "keto",
            Self::LowCarb => "low_carb",
            Self::HighProtein => "high_protein",
            Self::LowFat => "low_fat",
            Self::HighCarb => "high_carb",
            Self::Balanced => "balanced",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classification rule
#[derive(Debug, Clone, Copy)]
pub struct DietRule {
    /// Diet reported when the rule matches
    pub diet_type: DietType,
    /// Predicate over the macro shares
    pub matches: fn(&MacroBreakdown, &DietThresholdsConfig) -> bool,
}

fn is_keto(m: &MacroBreakdown, t: &DietThresholdsConfig) -> bool {
    m.fat_percent > t.keto_min_fat_percent && m.carbs_percent < t.keto_max_carbs_percent
}

fn is_low_carb(m: &MacroBreakdown, t: &DietThresholdsConfig) -> bool {
    m.carbs_percent < t.low_carb_max_carbs_percent
}

fn is_high_protein(m: &MacroBreakdown, t: &DietThresholdsConfig) -> bool {
    m.protein_percent > t.high_protein_min_protein_percent
}

fn is_low_fat(m: &MacroBreakdown, t: &DietThresholdsConfig) -> bool {
    m.fat_percent < t.low_fat_max_fat_percent
}

fn is_high_carb(m: &MacroBreakdown, t: &DietThresholdsConfig) -> bool {
    m.carbs_percent > t.high_carb_min_carbs_percent
}

/// Classification rules in priority order
pub static DIET_RULES: &[DietRule] = &[
    DietRule {
        diet_type: DietType::Keto,
        matches: is_keto,
    },
    DietRule {
        diet_type: DietType::LowCarb,
        matches: is_low_carb,
    },
    DietRule {
        diet_type: DietType::HighProtein,
        matches: is_high_protein,
    },
    DietRule {
        diet_type: DietType::LowFat,
        matches: is_low_fat,
    },
    DietRule {
        diet_type: DietType::HighCarb,
        matches: is_high_carb,
    },
];

/// Classify a day's intake by the default rule list
///
/// Zero total energy is `Balanced` without evaluating any rule.
#[must_use]
pub fn classify_diet(
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    thresholds: &DietThresholdsConfig,
) -> DietType {
    classify_diet_with_rules(protein_g, carbs_g, fat_g, thresholds, DIET_RULES)
}

/// Classify against an explicit rule list; the first matching rule wins
#[must_use]
pub fn classify_diet_with_rules(
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    thresholds: &DietThresholdsConfig,
    rules: &[DietRule],
) -> DietType {
    let Some(breakdown) = MacroBreakdown::from_grams(protein_g, carbs_g, fat_g) else {
        return DietType::Balanced;
    };

    rules
        .iter()
        .find(|rule| (rule.matches)(&breakdown, thresholds))
        .map_or(DietType::Balanced, |rule| rule.diet_type)
}
