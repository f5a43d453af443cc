// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Documented defaults table, vocabulary labels and collaborator defaults for MoodFit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. The [`defaults`] table is the single place
//! where missing daily-state and profile fields get their fallback values.

/// Documented defaults applied once by DailyState/profile normalization
pub mod defaults {
    /// Sleep hours when not reported
    pub const SLEEP_HOURS: f64 = 7.0;
    /// Available exercise time in minutes when not reported
    pub const AVAILABLE_MINUTES: f64 = 30.0;
    /// Arousal used when no reported emotion is recognized
    pub const AROUSAL: f64 = 3.0;
    /// Purpose label used when none is stated
    pub const PURPOSE: &str = "체력 향상";
    /// Upper bound for plausible sleep hours
    pub const MAX_SLEEP_HOURS: f64 = 24.0;
    /// Marker meaning "nothing owned" in the equipment field
    pub const NO_EQUIPMENT_MARKER: &str = "없음";
}

/// Labels in the domain language used on the wire and in storage
pub mod labels {
    /// Low intensity tier
    pub const TIER_LOW: &str = "저강도";
    /// Medium intensity tier
    pub const TIER_MEDIUM: &str = "중강도";
    /// High intensity tier
    pub const TIER_HIGH: &str = "고강도";

    /// Low stress/activity level
    pub const LEVEL_LOW: &str = "낮음";
    /// Medium stress/activity level
    pub const LEVEL_MEDIUM: &str = "보통";
    /// High stress/activity level
    pub const LEVEL_HIGH: &str = "높음";

    /// No injury
    pub const INJURY_NONE: &str = "없음";
    /// Has injury
    pub const INJURY_PRESENT: &str = "있음";

    /// Indoor venue
    pub const VENUE_INDOOR: &str = "실내";
    /// Outdoor venue
    pub const VENUE_OUTDOOR: &str = "실외";
    /// Either venue
    pub const VENUE_EITHER: &str = "상관없음";
}

/// Exercise catalog column names
pub mod catalog {
    /// Exercise name column
    pub const COLUMN_NAME: &str = "운동명";
    /// Intensity tier column
    pub const COLUMN_TIER: &str = "운동강도";
    /// Comma-joined purpose tags column
    pub const COLUMN_PURPOSES: &str = "운동목적";
    /// Comma-joined emotion tags column
    pub const COLUMN_EMOTIONS: &str = "감정매핑";
    /// Energy cost per unit body weight column
    pub const COLUMN_ENERGY: &str = "단위체중당에너지소비량";

    /// All columns a catalog must carry
    pub const REQUIRED_COLUMNS: [&str; 5] = [
        COLUMN_NAME,
        COLUMN_TIER,
        COLUMN_PURPOSES,
        COLUMN_EMOTIONS,
        COLUMN_ENERGY,
    ];
}

/// Weather collaborator defaults
pub mod weather {
    /// Condition reported when no reading is available
    pub const UNKNOWN_CONDITION: &str = "unknown";
    /// OpenWeatherMap current-weather endpoint
    pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
    /// Request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
    /// City used when the caller supplies none
    pub const DEFAULT_CITY: &str = "Seoul";
}

/// Ranking collaborator defaults
pub mod ranking {
    /// Number of ranked exercises returned per request
    pub const DEFAULT_TOP_N: usize = 3;
    /// Justification attached when falling back to candidate order
    pub const FALLBACK_REASON: &str =
        "LLM 파싱 실패로 룰 기반 상위 후보를 임시 추천했습니다.";
}

/// Evaluation survey bounds
pub mod evaluation {
    /// Lowest allowed rating
    pub const MIN_SCORE: u8 = 1;
    /// Highest allowed rating
    pub const MAX_SCORE: u8 = 5;
    /// Number of fixed survey questions
    pub const SURVEY_QUESTIONS: usize = 8;
}
