// ABOUTME: Venue resolution configuration for weather-aware place selection
// ABOUTME: Configures bad-weather keywords and the user-facing venue messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Venue Resolution Configuration
//!
//! Bad-weather keywords are matched as lowercase substrings of the reported
//! weather condition. Messages are shown to the user alongside the venue.

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the preferred venue label in `preferred` messages
pub const VENUE_PLACEHOLDER: &str = "{venue}";

/// Venue resolution configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueConfig {
    /// Weather keywords that force an indoor venue
    pub bad_weather: BadWeatherConfig,
    /// Messages explaining the resolved venue
    pub messages: VenueMessages,
}

/// Weather conditions that rule out outdoor exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadWeatherConfig {
    /// Lowercase substrings, any match forces indoor
    pub keywords: Vec<String>,
}

/// Messages attached to the resolved venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueMessages {
    /// Bad weather forced indoor
    pub bad_weather: String,
    /// Stated preference honored, `{venue}` is replaced with the label
    pub preferred: String,
    /// No usable preference and fair weather
    pub either: String,
}

impl Default for BadWeatherConfig {
    fn default() -> Self {
        Self {
            keywords: ["rain", "drizzle", "thunderstorm", "snow"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl Default for VenueMessages {
    fn default() -> Self {
        Self {
            bad_weather: "날씨 영향으로 실내 운동을 우선 추천합니다.".to_owned(),
            preferred: "사용자 선호 장소({venue})를 반영해 추천합니다.".to_owned(),
            either: "날씨가 무난해 실내/실외 모두 고려해 추천합니다.".to_owned(),
        }
    }
}
