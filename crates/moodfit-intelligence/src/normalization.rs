// ABOUTME: DailyState and UserProfile normalization against the documented defaults table
// ABOUTME: Absent or malformed fields are replaced once here so inference sees complete input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record normalization
//!
//! Every fallback value comes from [`moodfit_core::constants::defaults`].
//! A present-but-unusable value (NaN, negative, more than 24 hours of sleep,
//! an unknown stress label) is logged at `warn!` before being replaced.
//! Zero is a real value and is kept.

use moodfit_core::constants::defaults;
use moodfit_core::errors::{AppError, AppResult};
use moodfit_core::models::{
    parse_injury_status, DailyState, DailyStateRecord, Level, Purpose, UserProfile,
    UserProfileRecord, VenuePreference,
};
use tracing::warn;

/// Split a comma-joined field into trimmed, non-empty items in order
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn number_or_default(field: &'static str, value: Option<f64>, default: f64, max: f64) -> f64 {
    match value {
        None => default,
        Some(v) if v.is_finite() && (0.0..=max).contains(&v) => v,
        Some(v) => {
            warn!(field, value = v, default, "Replacing out-of-range value with default");
            default
        }
    }
}

fn level_or_default(field: &'static str, raw: Option<&str>) -> Level {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Level::default(),
        Some(label) => Level::parse(label).unwrap_or_else(|| {
            warn!(field, label, "Unknown level label, using default");
            Level::default()
        }),
    }
}

/// Apply the defaults table to a raw daily record
#[must_use]
pub fn normalize(record: &DailyStateRecord) -> DailyState {
    let emotions = record.emotions.as_deref().map(split_list).unwrap_or_default();

    let purpose = record
        .purpose
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(Purpose::default, Purpose::parse);

    let venue = record
        .venue
        .as_deref()
        .map_or(VenuePreference::NoPreference, VenuePreference::parse);

    let equipment = record
        .equipment
        .as_deref()
        .map(split_list)
        .unwrap_or_default()
        .into_iter()
        .filter(|item| item != defaults::NO_EQUIPMENT_MARKER)
        .collect();

    DailyState {
        date: record.date,
        emotions,
        sleep_hours: number_or_default(
            "sleep_hours",
            record.sleep_hours,
            defaults::SLEEP_HOURS,
            defaults::MAX_SLEEP_HOURS,
        ),
        available_minutes: number_or_default(
            "available_minutes",
            record.available_minutes,
            defaults::AVAILABLE_MINUTES,
            f64::MAX,
        ),
        stress: level_or_default("stress", record.stress.as_deref()),
        purpose,
        venue,
        equipment,
    }
}

/// Apply the defaults table to a raw registration record
///
/// # Errors
///
/// Returns `InvalidInput` when the name is blank.
pub fn normalize_profile(record: &UserProfileRecord) -> AppResult<UserProfile> {
    let name = record.name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("user name must not be empty"));
    }

    let injury_details = record
        .injury_details
        .as_deref()
        .map(split_list)
        .unwrap_or_default();

    let has_injury = match record.injury_status.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => parse_injury_status(label).unwrap_or_else(|| {
            warn!(label, "Unknown injury status, inferring from details");
            !injury_details.is_empty()
        }),
        _ => !injury_details.is_empty(),
    };

    let positive = |field: &'static str, value: Option<f64>| {
        value.filter(|v| {
            let ok = v.is_finite() && *v > 0.0;
            if !ok {
                warn!(field, value = v, "Dropping non-positive measurement");
            }
            ok
        })
    };

    Ok(UserProfile {
        name: name.to_owned(),
        age: record.age,
        gender: record
            .gender
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_owned),
        height_cm: positive("height_cm", record.height_cm),
        weight_kg: positive("weight_kg", record.weight_kg),
        activity_level: level_or_default("activity_level", record.activity_level.as_deref()),
        has_injury,
        injury_details: if has_injury { injury_details } else { Vec::new() },
    })
}
