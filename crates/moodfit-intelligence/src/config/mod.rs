// ABOUTME: Configuration module for the recommendation intelligence engine
// ABOUTME: Re-exports the intelligence configuration sections and their error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence configuration sections
pub mod intelligence;

pub use intelligence::{
    BadWeatherConfig, CandidateConfig, ConfigError, EmotionConfig, InferenceConfig,
    IntelligenceConfig, VenueConfig, VenueMessages,
};
