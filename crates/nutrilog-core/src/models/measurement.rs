// ABOUTME: Body measurement model for weight and body fat history
// ABOUTME: Includes boundary validation of accepted weight and body fat ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

use crate::constants::physiology::{
    MEASUREMENT_MAX_BODY_FAT_PERCENT, MEASUREMENT_MAX_NOTE_CHARS, MEASUREMENT_MAX_WEIGHT_KG,
    MEASUREMENT_MIN_BODY_FAT_PERCENT, MEASUREMENT_MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated body weight / body fat reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyMeasurement {
    /// Measurement identifier
    pub id: Uuid,
    /// Day of the reading
    pub date: NaiveDate,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body fat percentage, when measured
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    /// Free-form note
    #[serde(default)]
    pub notes: Option<String>,
}

impl BodyMeasurement {
    /// Validate a measurement before it is stored
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the weight is outside 20-500 kg, the body
    /// fat is outside 2-60 %, or the note is longer than 500 characters.
    pub fn validate(&self) -> AppResult<()> {
        if !(MEASUREMENT_MIN_WEIGHT_KG..=MEASUREMENT_MAX_WEIGHT_KG).contains(&self.weight_kg) {
            return Err(AppError::value_out_of_range(
                "weight_kg",
                format!(
                    "Weight must be between {MEASUREMENT_MIN_WEIGHT_KG} and {MEASUREMENT_MAX_WEIGHT_KG} kg, got {}",
                    self.weight_kg
                ),
            ));
        }
        if let Some(body_fat) = self.body_fat_percent {
            if !(MEASUREMENT_MIN_BODY_FAT_PERCENT..=MEASUREMENT_MAX_BODY_FAT_PERCENT)
                .contains(&body_fat)
            {
                return Err(AppError::value_out_of_range(
                    "body_fat_percent",
                    format!(
                        "Body fat must be between {MEASUREMENT_MIN_BODY_FAT_PERCENT} and {MEASUREMENT_MAX_BODY_FAT_PERCENT}%, got {body_fat}"
                    ),
                ));
            }
        }
        if let Some(notes) = &self.notes {
            if notes.chars().count() > MEASUREMENT_MAX_NOTE_CHARS {
                return Err(AppError::value_out_of_range(
                    "notes",
                    format!("Notes are limited to {MEASUREMENT_MAX_NOTE_CHARS} characters"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(weight_kg: f64, body_fat_percent: Option<f64>) -> BodyMeasurement {
        BodyMeasurement {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap_or_default(),
            weight_kg,
            body_fat_percent,
            notes: None,
        }
    }

    #[test]
    fn test_measurement_ranges() {
        assert!(measurement(80.0, Some(18.0)).validate().is_ok());
        assert!(measurement(80.0, None).validate().is_ok());
        assert!(measurement(19.9, None).validate().is_err());
        assert!(measurement(501.0, None).validate().is_err());
        assert!(measurement(80.0, Some(1.5)).validate().is_err());
        assert!(measurement(80.0, Some(61.0)).validate().is_err());
    }
}
