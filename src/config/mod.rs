// ABOUTME: Configuration module for the MoodFit service and CLI
// ABOUTME: Environment-driven settings plus the re-exported intelligence configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration
pub mod environment;

pub use environment::{
    MoodFitConfig, WeatherSettings, DEFAULT_CATALOG_PATH, DEFAULT_DATABASE_URL,
};
pub use moodfit_intelligence::config::{ConfigError, IntelligenceConfig};
