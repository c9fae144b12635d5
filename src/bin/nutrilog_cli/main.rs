// ABOUTME: Nutrilog CLI - command-line front end to the nutrition engine
// ABOUTME: Computes targets, diet classes, projections and week dates and prints them as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors
//!
//! Usage:
//! ```bash
//! # Daily targets for a profile
//! nutrilog-cli targets --weight 80 --height 180 --age 30 --gender male --activity moderate --goal lose
//!
//! # Classify a day's macros
//! nutrilog-cli classify --protein 150 --carbs 20 --fat 140
//!
//! # Project weight over 30 days
//! nutrilog-cli predict-weight --weight 80 --target 2500 --intake 2000
//!
//! # Body fat category, masses and days to a target
//! nutrilog-cli body-fat --weight 80 --body-fat 25 --gender male --target 15 --deficit 500
//!
//! # Days to the default goal for the gender
//! nutrilog-cli body-fat --weight 80 --body-fat 25 --gender male --deficit 500
//!
//! # Monday-based week containing a date
//! nutrilog-cli week --date 2026-03-04
//! ```

mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nutrilog::constants::physiology::DEFAULT_PREDICTION_DAYS;
use nutrilog::constants::service_names;
use nutrilog::errors::{AppError, AppResult};
use nutrilog::logging::LoggingConfig;
use nutrilog::models::{ActivityLevel, Gender, Goal};
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutrilog-cli",
    about = "Nutrilog nutrition engine CLI",
    long_about = "Command-line front end to the Nutrilog nutrition engine. Every command prints JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// BMR, TDEE, calorie target and macro targets for a profile
    Targets {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,
        /// Height (cm)
        #[arg(long)]
        height: f64,
        /// Age (years)
        #[arg(long)]
        age: u32,
        /// male | female
        #[arg(long)]
        gender: Gender,
        /// sedentary | light | moderate | active | very_active
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,
        /// lose | maintain | gain
        #[arg(long, default_value = "maintain")]
        goal: Goal,
    },

    /// Diet type and macro percentages of a day's intake
    Classify {
        /// Protein (g)
        #[arg(long)]
        protein: f64,
        /// Carbohydrates (g)
        #[arg(long)]
        carbs: f64,
        /// Fat (g)
        #[arg(long)]
        fat: f64,
    },

    /// Project body weight from average intake against a target
    PredictWeight {
        /// Current weight (kg)
        #[arg(long)]
        weight: f64,
        /// Daily calorie target (kcal)
        #[arg(long)]
        target: f64,
        /// Average daily intake (kcal)
        #[arg(long)]
        intake: f64,
        /// Projection horizon (days)
        #[arg(long, default_value_t = DEFAULT_PREDICTION_DAYS)]
        days: u32,
    },

    /// Body fat category, fat and lean mass, optional days to a target
    BodyFat {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,
        /// Body fat (%)
        #[arg(long)]
        body_fat: f64,
        /// male | female
        #[arg(long)]
        gender: Gender,
        /// Target body fat (%), defaults to 15 for men and 22 for women
        #[arg(long, requires = "deficit")]
        target: Option<f64>,
        /// Daily calorie deficit (kcal)
        #[arg(long)]
        deficit: Option<f64>,
    },

    /// The Monday-based week containing a date (default today)
    Week {
        /// Reference date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if std::env::var("SERVICE_NAME").is_err() {
        service_names::NUTRILOG_CLI.clone_into(&mut logging.service_name);
    }
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let output = match cli.command {
        Command::Targets {
            weight,
            height,
            age,
            gender,
            activity,
            goal,
        } => commands::targets(weight, height, age, gender, activity, goal)?,
        Command::Classify {
            protein,
            carbs,
            fat,
        } => commands::classify(protein, carbs, fat),
        Command::PredictWeight {
            weight,
            target,
            intake,
            days,
        } => commands::predict_weight(weight, target, intake, days),
        Command::BodyFat {
            weight,
            body_fat,
            gender,
            target,
            deficit,
        } => commands::body_fat(weight, body_fat, gender, target, deficit)?,
        Command::Week { date } => commands::week(date),
    };

    debug!("Command completed");
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
