// ABOUTME: Core data models for the Nutrilog nutrition engine
// ABOUTME: Re-exports Profile, Meal, BodyMeasurement and their enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! # Data Models
//!
//! Records supplied by the persistence layer. The engine only ever reads
//! them; validation happens at the boundary through the `validate()` methods
//! and the `FromStr` implementations of the enumerations.

mod meal;
mod measurement;
mod profile;

pub use meal::{Meal, MealType};
pub use measurement::BodyMeasurement;
pub use profile::{ActivityLevel, Gender, Goal, IfProtocol, Profile};
