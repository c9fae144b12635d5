// ABOUTME: User profile model with biometrics, goal, and intermittent fasting settings
// ABOUTME: Gender, ActivityLevel, Goal and IfProtocol enums with strict string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

use crate::constants::time::DAY_HOURS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Biological sex used by the BMR and body-fat band tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal BMR offset)
    Male,
    /// Female (-161 kcal BMR offset)
    Female,
}

impl Gender {
    /// Wire name of this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}': expected 'male' or 'female'"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level tiers for the TDEE multiplier, ordered from least to most active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Training twice a day
    VeryActive,
}

impl ActivityLevel {
    /// All tiers in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire name of this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown activity level '{s}': expected one of sedentary, light, moderate, active, very_active"
                ))
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body weight goal driving the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl Goal {
    /// Wire name of this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal '{other}': expected 'lose', 'maintain' or 'gain'"
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intermittent fasting protocol (fasting hours : eating hours)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum IfProtocol {
    /// 16 hours fasting, 8 hours eating
    #[default]
    #[serde(rename = "16:8")]
    SixteenEight,
    /// 18 hours fasting, 6 hours eating
    #[serde(rename = "18:6")]
    EighteenSix,
    /// 20 hours fasting, 4 hours eating
    #[serde(rename = "20:4")]
    TwentyFour,
    /// User-defined window, see `Profile::if_window_hours`
    #[serde(rename = "custom")]
    Custom,
}

impl IfProtocol {
    /// Fasting hours of the protocol (0 for custom)
    #[must_use]
    pub const fn fast_hours(self) -> u8 {
        match self {
            Self::SixteenEight => 16,
            Self::EighteenSix => 18,
            Self::TwentyFour => 20,
            Self::Custom => 0,
        }
    }

    /// Eating hours of the protocol (0 for custom)
    #[must_use]
    pub const fn eat_hours(self) -> u8 {
        match self {
            Self::Custom => 0,
            other => DAY_HOURS - other.fast_hours(),
        }
    }

    /// Wire name of this value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SixteenEight => "16:8",
            Self::EighteenSix => "18:6",
            Self::TwentyFour => "20:4",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for IfProtocol {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "16:8" => Ok(Self::SixteenEight),
            "18:6" => Ok(Self::EighteenSix),
            "20:4" => Ok(Self::TwentyFour),
            "custom" => Ok(Self::Custom),
            other => Err(AppError::invalid_input(format!(
                "Unknown fasting protocol '{other}': expected 16:8, 18:6, 20:4 or custom"
            ))),
        }
    }
}

/// User profile as stored by the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Profile (and user) identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Biological sex for BMR and body-fat bands
    pub gender: Gender,
    /// Activity tier for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
    /// Stored daily calorie target (kcal)
    pub daily_calorie_target: u32,
    /// Latest body fat percentage, if known
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    /// Whether intermittent fasting tracking is enabled
    #[serde(default)]
    pub if_enabled: bool,
    /// Fasting protocol
    #[serde(default)]
    pub if_protocol: IfProtocol,
    /// Hour of day (0-23) at which the eating window opens
    #[serde(default)]
    pub if_window_start: u8,
    /// Length of the eating window in hours
    #[serde(default)]
    pub if_window_hours: u8,
}

impl Profile {
    /// Check the invariants the nutrition engine relies on
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if weight, height or age is not positive,
    /// if the body fat percentage is outside 0-100, or if the fasting window
    /// is malformed while fasting is enabled.
    pub fn validate(&self) -> AppResult<()> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(AppError::value_out_of_range(
                "weight_kg",
                format!("Weight must be positive, got {}", self.weight_kg),
            ));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(AppError::value_out_of_range(
                "height_cm",
                format!("Height must be positive, got {}", self.height_cm),
            ));
        }
        if self.age == 0 {
            return Err(AppError::value_out_of_range("age", "Age must be positive"));
        }
        if let Some(body_fat) = self.body_fat_percent {
            if !(0.0..=100.0).contains(&body_fat) {
                return Err(AppError::value_out_of_range(
                    "body_fat_percent",
                    format!("Body fat must be between 0 and 100%, got {body_fat}"),
                ));
            }
        }
        if self.if_enabled {
            if self.if_window_start >= DAY_HOURS {
                return Err(AppError::value_out_of_range(
                    "if_window_start",
                    format!(
                        "Eating window start must be an hour between 0 and 23, got {}",
                        self.if_window_start
                    ),
                ));
            }
            if self.if_window_hours == 0 || self.if_window_hours >= DAY_HOURS {
                return Err(AppError::value_out_of_range(
                    "if_window_hours",
                    format!(
                        "Eating window must last between 1 and 23 hours, got {}",
                        self.if_window_hours
                    ),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            name: "Test".to_owned(),
            weight_kg: 80.0,
            height_cm: 180.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            daily_calorie_target: 2500,
            body_fat_percent: Some(20.0),
            if_enabled: false,
            if_protocol: IfProtocol::SixteenEight,
            if_window_start: 12,
            if_window_hours: 8,
        }
    }

    #[test]
    fn test_unknown_enum_values_fail_fast() {
        assert!("other".parse::<Gender>().is_err());
        assert!("extreme".parse::<ActivityLevel>().is_err());
        assert!("bulk".parse::<Goal>().is_err());
        assert!("23:1".parse::<IfProtocol>().is_err());
        assert_eq!(
            "very_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_biometrics() {
        assert!(profile().validate().is_ok());

        let mut invalid = profile();
        invalid.weight_kg = 0.0;
        assert!(invalid.validate().is_err());

        let mut invalid = profile();
        invalid.height_cm = -170.0;
        assert!(invalid.validate().is_err());

        let mut invalid = profile();
        invalid.age = 0;
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_validate_checks_fasting_window_only_when_enabled() {
        let mut p = profile();
        p.if_window_hours = 0;
        assert!(p.validate().is_ok());
        p.if_enabled = true;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_protocol_hours() {
        assert_eq!(IfProtocol::EighteenSix.eat_hours(), 6);
        assert_eq!(IfProtocol::Custom.fast_hours(), 0);
    }
}
