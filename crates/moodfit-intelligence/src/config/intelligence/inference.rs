// ABOUTME: Intensity inference thresholds for arousal, sleep and session length
// ABOUTME: Defaults reproduce the documented rule constants exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use moodfit_core::constants::defaults;
use serde::{Deserialize, Serialize};

/// Thresholds used by the intensity inferencer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Arousal at or above this starts at the high tier
    pub high_arousal_threshold: f64,
    /// Arousal at or above this (and below high) starts at the medium tier
    pub medium_arousal_threshold: f64,
    /// Arousal assumed when no recognized emotion was reported
    pub default_arousal: f64,
    /// Sleep below this many hours forces one tier down
    pub sleep_deficit_hours: f64,
    /// Available minutes at or above this allow an upgrade for active users
    pub long_session_minutes: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            high_arousal_threshold: 4.0,
            medium_arousal_threshold: 2.5,
            default_arousal: defaults::AROUSAL,
            sleep_deficit_hours: 5.0,
            long_session_minutes: 60.0,
        }
    }
}
