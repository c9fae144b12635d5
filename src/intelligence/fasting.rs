// ABOUTME: Intermittent fasting schedule helpers and compliance statistics
// ABOUTME: Eating window checks across midnight, fasting timer and per-day compliance streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrilog Contributors

//! Intermittent fasting
//!
//! The eating window opens at `window_start` (hour of day, local wall clock)
//! and stays open for `window_hours`. Windows may cross midnight, e.g. a
//! start of 20 with 8 hours closes at 04:00.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike};
use nutrilog_core::constants::time::{DAY_HOURS, DAY_MINUTES};
use nutrilog_core::models::{Meal, Profile};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Eating window of a fasting protocol
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FastingSchedule {
    /// Hour the window opens (0-23)
    pub window_start: u8,
    /// Window length in hours
    pub window_hours: u8,
}

impl FastingSchedule {
    /// Schedule of a profile, `None` when fasting is disabled
    #[must_use]
    pub const fn from_profile(profile: &Profile) -> Option<Self> {
        if !profile.if_enabled {
            return None;
        }
        Some(Self {
            window_start: profile.if_window_start,
            window_hours: profile.if_window_hours,
        })
    }

    /// Hour the window closes (0-23)
    #[must_use]
    pub fn window_end(self) -> u8 {
        ((u16::from(self.window_start) + u16::from(self.window_hours)) % u16::from(DAY_HOURS)) as u8
    }

    fn start_minute(self) -> u32 {
        u32::from(self.window_start) * 60
    }

    fn end_minute(self) -> u32 {
        u32::from(self.window_end()) * 60
    }
}

/// Fasting timer state at a point in time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FastingStatus {
    /// Whether the eating window is closed
    pub is_fasting: bool,
    /// Whole hours since the window opened (eating) or closed (fasting)
    pub hours: u32,
    /// Remaining minutes
    pub minutes: u32,
}

/// Per-day compliance with the eating window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IfComplianceStats {
    /// Compliant days as a rounded share of days with meals (%)
    pub compliance_percent: u32,
    /// Days where every meal was inside the window
    pub compliant_days: u32,
    /// Days with at least one meal
    pub total_days: u32,
    /// Compliant days counted back from the most recent day with meals
    pub current_streak: u32,
    /// Longest run of compliant days
    pub max_streak: u32,
    /// Average fast length implied by the window (hours)
    pub avg_fast_hours: u8,
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Whether `time` falls inside the eating window
///
/// The start is inclusive and the end exclusive.
#[must_use]
pub fn is_in_eating_window(schedule: &FastingSchedule, time: NaiveTime) -> bool {
    let now = minute_of_day(time);
    let start = schedule.start_minute();
    let end = schedule.end_minute();

    if end > start {
        now >= start && now < end
    } else {
        now >= start || now < end
    }
}

/// `HH:00–HH:00`
#[must_use]
pub fn format_eating_window(schedule: &FastingSchedule) -> String {
    format!(
        "{:02}:00\u{2013}{:02}:00",
        schedule.window_start,
        schedule.window_end()
    )
}

/// Time since the window opened when eating, or since it closed when fasting
#[must_use]
pub fn fasting_status(schedule: &FastingSchedule, time: NaiveTime) -> FastingStatus {
    let now = minute_of_day(time);
    let is_fasting = !is_in_eating_window(schedule, time);
    let anchor = if is_fasting {
        schedule.end_minute()
    } else {
        schedule.start_minute()
    };
    let elapsed = (now + DAY_MINUTES - anchor) % DAY_MINUTES;

    FastingStatus {
        is_fasting,
        hours: elapsed / 60,
        minutes: elapsed % 60,
    }
}

/// Whether a meal eaten at `eaten_at` respects the profile's window
///
/// Always true when fasting is disabled. Uses the wall clock of the
/// timestamp's own offset.
#[must_use]
pub fn meal_in_eating_window(profile: &Profile, eaten_at: &DateTime<FixedOffset>) -> bool {
    FastingSchedule::from_profile(profile)
        .is_none_or(|schedule| is_in_eating_window(&schedule, eaten_at.time()))
}

/// Compliance over the given dates
///
/// A day is compliant when every meal that day was logged inside the window.
/// Days without meals neither count nor break a streak. Dates may arrive in
/// any order and may repeat; streaks always follow calendar order.
#[must_use]
pub fn calculate_if_compliance(
    meals: &[Meal],
    dates: &[NaiveDate],
    window_hours: u8,
) -> IfComplianceStats {
    let mut by_day: BTreeMap<NaiveDate, bool> = BTreeMap::new();
    for meal in meals {
        let compliant = by_day.entry(meal.eaten_date()).or_insert(true);
        *compliant &= meal.in_if_window;
    }

    let dates: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    let days: Vec<bool> = dates
        .iter()
        .filter_map(|date| by_day.get(date).copied())
        .collect();

    let total_days = days.len() as u32;
    let compliant_days = days.iter().filter(|c| **c).count() as u32;
    let compliance_percent = if total_days == 0 {
        0
    } else {
        (f64::from(compliant_days) / f64::from(total_days) * 100.0).round() as u32
    };

    let current_streak = days.iter().rev().take_while(|c| **c).count() as u32;
    let max_streak = days
        .iter()
        .fold((0_u32, 0_u32), |(run, best), compliant| {
            let run = if *compliant { run + 1 } else { 0 };
            (run, best.max(run))
        })
        .1;

    IfComplianceStats {
        compliance_percent,
        compliant_days,
        total_days,
        current_streak,
        max_streak,
        avg_fast_hours: DAY_HOURS.saturating_sub(window_hours),
    }
}
