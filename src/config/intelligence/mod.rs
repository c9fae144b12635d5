// ABOUTME: Intelligence configuration for the nutrition engine
// ABOUTME: Re-exports the nutrition coefficient tables and their validation error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Intelligence Configuration Module
//!
//! Type-safe coefficient tables for the nutrition engine. Defaults carry the
//! published values; `validate()` rejects tables that would break the
//! engine's ordering or percentage assumptions.

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, BodyFatBands, BodyFatBandsConfig, DietThresholdsConfig,
    GoalAdjustmentConfig, MacroDistribution, MacroSplitConfig, NutritionConfig,
};
