// ABOUTME: Daily check-in model with purpose and venue vocabularies
// ABOUTME: DailyState is the normalized form, DailyStateRecord the raw submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::profile::StressLevel;
use crate::constants::{defaults, labels};

/// Stated exercise purpose
///
/// Known purposes get their own variant; anything else is carried verbatim so
/// catalogs with extra purpose tags still match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    /// 체중 감량
    WeightLoss,
    /// 체력 향상
    Fitness,
    /// 스트레스 해소
    StressRelief,
    /// 체형 교정
    PostureCorrection,
    /// Any other label
    Other(String),
}

impl Default for Purpose {
    fn default() -> Self {
        Self::parse(defaults::PURPOSE)
    }
}

impl Purpose {
    /// Catalog tag this purpose matches against
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::WeightLoss => "체중 감량",
            Self::Fitness => "체력 향상",
            Self::StressRelief => "스트레스 해소",
            Self::PostureCorrection => "체형 교정",
            Self::Other(label) => label,
        }
    }

    /// Map a label onto a known purpose, keeping unknown labels as `Other`
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "체중 감량" | "weight_loss" => Self::WeightLoss,
            "체력 향상" | "fitness" => Self::Fitness,
            "스트레스 해소" | "stress_relief" => Self::StressRelief,
            "체형 교정" | "posture_correction" => Self::PostureCorrection,
            other => Self::Other(other.to_owned()),
        }
    }

    /// True when the purpose label mentions stress relief
    #[must_use]
    pub fn is_stress_relief(&self) -> bool {
        matches!(self, Self::StressRelief) || self.label().contains("스트레스 해소")
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Venue the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenuePreference {
    /// 실내
    Indoor,
    /// 실외
    Outdoor,
    /// Anything else, including empty
    #[default]
    NoPreference,
}

impl VenuePreference {
    /// Only an exact indoor/outdoor label expresses a preference
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            labels::VENUE_INDOOR | "indoor" => Self::Indoor,
            labels::VENUE_OUTDOOR | "outdoor" => Self::Outdoor,
            _ => Self::NoPreference,
        }
    }

    /// Domain-language label, empty for no preference
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Indoor => labels::VENUE_INDOOR,
            Self::Outdoor => labels::VENUE_OUTDOOR,
            Self::NoPreference => "",
        }
    }
}

/// Venue after weather has been taken into account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveVenue {
    /// 실내
    Indoor,
    /// 실외
    Outdoor,
    /// 상관없음
    Either,
}

impl EffectiveVenue {
    /// Domain-language label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Indoor => labels::VENUE_INDOOR,
            Self::Outdoor => labels::VENUE_OUTDOOR,
            Self::Either => labels::VENUE_EITHER,
        }
    }
}

impl fmt::Display for EffectiveVenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One user's normalized check-in for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyState {
    /// Check-in date
    pub date: NaiveDate,
    /// Reported emotion labels in reported order
    pub emotions: Vec<String>,
    /// Sleep hours, 0 to 24
    pub sleep_hours: f64,
    /// Available exercise time in minutes
    pub available_minutes: f64,
    /// Stress level
    pub stress: StressLevel,
    /// Stated purpose
    pub purpose: Purpose,
    /// Stated venue preference
    pub venue: VenuePreference,
    /// Owned equipment
    pub equipment: Vec<String>,
}

impl DailyState {
    /// First reported emotion, the one rules look at
    #[must_use]
    pub fn primary_emotion(&self) -> Option<&str> {
        self.emotions.first().map(String::as_str)
    }
}

/// Check-in as submitted, fields may be absent or malformed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStateRecord {
    /// Check-in date
    pub date: NaiveDate,
    /// Comma-joined emotion labels
    pub emotions: Option<String>,
    /// Sleep hours
    pub sleep_hours: Option<f64>,
    /// Available minutes
    pub available_minutes: Option<f64>,
    /// Stress label
    pub stress: Option<String>,
    /// Purpose label
    pub purpose: Option<String>,
    /// Venue label
    pub venue: Option<String>,
    /// Comma-joined equipment
    pub equipment: Option<String>,
}

impl DailyStateRecord {
    /// Empty record for a date, every other field absent
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }
}
