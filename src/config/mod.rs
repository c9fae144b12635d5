// ABOUTME: Configuration module for engine coefficient tables and environment settings
// ABOUTME: Splits static nutrition tables from process-level environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Configuration management
//!
//! - `intelligence` - coefficient tables for the nutrition engine
//! - `environment` - process configuration loaded from environment variables

/// Process configuration loaded from environment variables
pub mod environment;

/// Nutrition engine coefficient tables
pub mod intelligence;
