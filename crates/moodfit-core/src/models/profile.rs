// ABOUTME: User profile model with activity level and injury status
// ABOUTME: Includes the raw registration record whose fields may be absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::labels;

/// Three-step scale used for both stress and baseline activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// 낮음
    Low,
    /// 보통
    #[default]
    Medium,
    /// 높음
    High,
}

/// Self-reported stress level
pub type StressLevel = Level;

/// Baseline physical activity level
pub type ActivityLevel = Level;

impl Level {
    /// Domain-language label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => labels::LEVEL_LOW,
            Self::Medium => labels::LEVEL_MEDIUM,
            Self::High => labels::LEVEL_HIGH,
        }
    }

    /// Parse from the Korean label or English name
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            labels::LEVEL_LOW | "low" => Some(Self::Low),
            labels::LEVEL_MEDIUM | "medium" => Some(Self::Medium),
            labels::LEVEL_HIGH | "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse an injury status label (`없음` / `있음`, or yes/no)
#[must_use]
pub fn parse_injury_status(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        labels::INJURY_NONE | "none" | "no" | "false" => Some(false),
        labels::INJURY_PRESENT | "yes" | "true" => Some(true),
        _ => None,
    }
}

/// Label for an injury flag
#[must_use]
pub const fn injury_label(has_injury: bool) -> &'static str {
    if has_injury {
        labels::INJURY_PRESENT
    } else {
        labels::INJURY_NONE
    }
}

/// Registered user profile, fully populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user name
    pub name: String,
    /// Age in years
    pub age: Option<u32>,
    /// Gender as entered
    pub gender: Option<String>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Baseline activity level
    pub activity_level: ActivityLevel,
    /// Whether the user currently has an injury
    pub has_injury: bool,
    /// Injured body parts
    pub injury_details: Vec<String>,
}

impl UserProfile {
    /// Profile with only a name and all documented defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: None,
            gender: None,
            height_cm: None,
            weight_kg: None,
            activity_level: ActivityLevel::default(),
            has_injury: false,
            injury_details: Vec::new(),
        }
    }

    /// Set the baseline activity level
    #[must_use]
    pub fn with_activity(mut self, level: ActivityLevel) -> Self {
        self.activity_level = level;
        self
    }

    /// Mark the user injured at the given body parts
    #[must_use]
    pub fn with_injury(mut self, parts: Vec<String>) -> Self {
        self.has_injury = true;
        self.injury_details = parts;
        self
    }
}

/// Profile as submitted at registration, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfileRecord {
    /// Unique user name
    pub name: String,
    /// Age in years
    pub age: Option<u32>,
    /// Gender as entered
    pub gender: Option<String>,
    /// Height text or number in centimetres
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Activity level label
    pub activity_level: Option<String>,
    /// Injury status label
    pub injury_status: Option<String>,
    /// Comma-joined injured body parts
    pub injury_details: Option<String>,
}
