// ABOUTME: Nutrition configuration for energy expenditure, targets, and diet analysis
// ABOUTME: Configures BMR coefficients, activity factors, goal adjustments, macro splits, and bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Nutrition Engine Configuration
//!
//! Coefficient tables consumed by the nutrition engine. The defaults are the
//! fixed tables the application ships with; nothing here is user-configurable
//! at runtime, but keeping them as data lets the engine be tested against
//! alternative tables and keeps every magic number in one place.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology
//! - Body fat bands: American Council on Exercise body fat classification

use super::error::ConfigError;
use nutrilog_core::models::{ActivityLevel, Gender, Goal};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::warn;

/// Global validated configuration
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Nutrition engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment applied to TDEE per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Macro energy split per goal
    pub macro_splits: MacroSplitConfig,
    /// Body fat category boundaries per gender
    pub body_fat_bands: BodyFatBandsConfig,
    /// Macro percentage thresholds for diet classification
    pub diet_thresholds: DietThresholdsConfig,
}

impl NutritionConfig {
    /// Get the global configuration instance (the shipped tables)
    #[must_use]
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(Self::default)
    }

    /// Parse a configuration from JSON and validate it
    ///
    /// Used to evaluate alternative coefficient tables; fields missing from
    /// the document keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and the validation
    /// error for a table that parses but is inconsistent
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if let Err(e) = config.validate() {
            warn!("Rejected nutrition config: {e}");
            return Err(e);
        }
        Ok(config)
    }

    /// Validate every sub-table
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found in any sub-table
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.goal_adjustments.validate()?;
        self.macro_splits.validate()?;
        self.body_fat_bands.validate()?;
        self.diet_thresholds.validate()
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Gender-specific constant of the formula
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (training twice a day): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity tier
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    /// Factors must be at least 1.0 and strictly increase with the tier
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` for non-ascending factors and `ValueOutOfRange`
    /// for factors below 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sedentary < 1.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "sedentary activity factor must be >= 1.0, got {}",
                self.sedentary
            )));
        }
        let ascending = ActivityLevel::ALL
            .windows(2)
            .all(|pair| self.factor(pair[0]) < self.factor(pair[1]));
        if !ascending {
            return Err(ConfigError::InvalidRange(
                "Activity factors must increase with activity level",
            ));
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Daily calorie adjustment applied to TDEE for each goal (kcal)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalAdjustmentConfig {
    /// Deficit for weight loss: -500 kcal
    pub lose_kcal: i32,
    /// Maintenance: 0 kcal
    pub maintain_kcal: i32,
    /// Surplus for weight gain: +300 kcal
    pub gain_kcal: i32,
}

impl GoalAdjustmentConfig {
    /// Adjustment for a goal
    #[must_use]
    pub const fn adjustment(&self, goal: Goal) -> i32 {
        match goal {
            Goal::Lose => self.lose_kcal,
            Goal::Maintain => self.maintain_kcal,
            Goal::Gain => self.gain_kcal,
        }
    }

    /// Adjustments must be ordered lose <= maintain <= gain
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the ordering does not hold
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lose_kcal > self.maintain_kcal || self.maintain_kcal > self.gain_kcal {
            return Err(ConfigError::InvalidRange(
                "Goal adjustments must be ordered lose <= maintain <= gain",
            ));
        }
        Ok(())
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_kcal: -500,
            maintain_kcal: 0,
            gain_kcal: 300,
        }
    }
}

/// Macro distribution as a share of total energy (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    fn sum(self) -> u16 {
        u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct)
    }
}

/// Macro energy split per goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplitConfig {
    /// Weight loss: 30/40/30
    pub lose: MacroDistribution,
    /// Maintenance: 25/45/30
    pub maintain: MacroDistribution,
    /// Weight gain: 25/50/25
    pub gain: MacroDistribution,
}

impl MacroSplitConfig {
    /// Split used for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> MacroDistribution {
        match goal {
            Goal::Lose => self.lose,
            Goal::Maintain => self.maintain,
            Goal::Gain => self.gain,
        }
    }

    /// Validate that each split sums to 100
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first split whose
    /// percentages do not sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("lose", &self.lose),
            ("maintain", &self.maintain),
            ("gain", &self.gain),
        ];

        for (name, split) in splits {
            let sum = split.sum();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }

        Ok(())
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            lose: MacroDistribution::new(30, 40, 30),
            maintain: MacroDistribution::new(25, 45, 30),
            gain: MacroDistribution::new(25, 50, 25),
        }
    }
}

/// Inclusive upper bounds of the body fat categories for one gender (%)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyFatBands {
    /// Upper bound of "athletic"
    pub athletic_max: f64,
    /// Upper bound of "fit"
    pub fit_max: f64,
    /// Upper bound of "average"; anything above is "overweight"
    pub average_max: f64,
}

impl BodyFatBands {
    fn validate(self, gender: &'static str) -> Result<(), ConfigError> {
        if !(0.0 < self.athletic_max
            && self.athletic_max < self.fit_max
            && self.fit_max < self.average_max
            && self.average_max <= 100.0)
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{gender} body fat bands must ascend within 0-100%"
            )));
        }
        Ok(())
    }
}

/// Body fat category boundaries per gender
///
/// Reference: American Council on Exercise body fat classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyFatBandsConfig {
    /// Male bands: 13 / 17 / 24
    pub male: BodyFatBands,
    /// Female bands: 20 / 24 / 31
    pub female: BodyFatBands,
}

impl BodyFatBandsConfig {
    /// Bands for a gender
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> &BodyFatBands {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Bands must ascend within 0-100%
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the offending gender
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.male.validate("male")?;
        self.female.validate("female")
    }
}

impl Default for BodyFatBandsConfig {
    fn default() -> Self {
        Self {
            male: BodyFatBands {
                athletic_max: 13.0,
                fit_max: 17.0,
                average_max: 24.0,
            },
            female: BodyFatBands {
                athletic_max: 20.0,
                fit_max: 24.0,
                average_max: 31.0,
            },
        }
    }
}

/// Macro energy-share thresholds used by the diet classification rules (%)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietThresholdsConfig {
    /// Keto requires fat share above this: 65
    pub keto_min_fat_percent: f64,
    /// Keto requires carbs share below this: 10
    pub keto_max_carbs_percent: f64,
    /// Low carb: carbs share below this: 25
    pub low_carb_max_carbs_percent: f64,
    /// High protein: protein share above this: 30
    pub high_protein_min_protein_percent: f64,
    /// Low fat: fat share below this: 20
    pub low_fat_max_fat_percent: f64,
    /// High carb: carbs share above this: 60
    pub high_carb_min_carbs_percent: f64,
}

impl DietThresholdsConfig {
    /// Every threshold is a percentage
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a threshold outside 0-100
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("keto_min_fat_percent", self.keto_min_fat_percent),
            ("keto_max_carbs_percent", self.keto_max_carbs_percent),
            ("low_carb_max_carbs_percent", self.low_carb_max_carbs_percent),
            (
                "high_protein_min_protein_percent",
                self.high_protein_min_protein_percent,
            ),
            ("low_fat_max_fat_percent", self.low_fat_max_fat_percent),
            ("high_carb_min_carbs_percent", self.high_carb_min_carbs_percent),
        ];
        for (name, value) in thresholds {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be between 0 and 100, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for DietThresholdsConfig {
    fn default() -> Self {
        Self {
            keto_min_fat_percent: 65.0,
            keto_max_carbs_percent: 10.0,
            low_carb_max_carbs_percent: 25.0,
            high_protein_min_protein_percent: 30.0,
            low_fat_max_fat_percent: 20.0,
            high_carb_min_carbs_percent: 60.0,
        }
    }
}
