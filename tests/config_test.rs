// ABOUTME: Tests for environment-driven configuration loading and validation
// ABOUTME: Runs serially since every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use moodfit::config::environment::{DEFAULT_CATALOG_PATH, DEFAULT_DATABASE_URL};
use moodfit::config::MoodFitConfig;
use moodfit_core::errors::ErrorCode;
use serial_test::serial;

const VARS: [&str; 13] = [
    "DATABASE_URL",
    "MOODFIT_CATALOG_PATH",
    "MOODFIT_DEFAULT_CITY",
    "MOODFIT_TOP_N",
    "WEATHER_API_KEY",
    "WEATHER_BASE_URL",
    "WEATHER_TIMEOUT_SECS",
    "MOODFIT_HIGH_AROUSAL_THRESHOLD",
    "MOODFIT_MEDIUM_AROUSAL_THRESHOLD",
    "MOODFIT_DEFAULT_AROUSAL",
    "MOODFIT_SLEEP_DEFICIT_HOURS",
    "MOODFIT_MIN_EXACT_CANDIDATES",
    "MOODFIT_BAD_WEATHER_KEYWORDS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = MoodFitConfig::from_env().unwrap();

    assert_eq!(config, MoodFitConfig::default());
    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
    assert_eq!(config.top_n, 3);
    assert!(config.weather.api_key.is_none());
    assert_eq!(config.weather.default_city, "Seoul");
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("MOODFIT_CATALOG_PATH", "/srv/moodfit/workout.csv");
    env::set_var("MOODFIT_TOP_N", "5");
    env::set_var("MOODFIT_DEFAULT_CITY", "Busan");
    env::set_var("WEATHER_API_KEY", "  secret  ");
    env::set_var("WEATHER_TIMEOUT_SECS", "2");
    env::set_var("MOODFIT_MIN_EXACT_CANDIDATES", "3");
    env::set_var("MOODFIT_BAD_WEATHER_KEYWORDS", "Rain, dust ,");

    let config = MoodFitConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.catalog_path, PathBuf::from("/srv/moodfit/workout.csv"));
    assert_eq!(config.top_n, 5);
    assert_eq!(config.weather.default_city, "Busan");
    assert_eq!(config.weather.api_key.as_deref(), Some("secret"));
    assert_eq!(config.weather.timeout().as_secs(), 2);
    assert_eq!(config.intelligence.candidates.min_exact_matches, 3);
    assert_eq!(
        config.intelligence.venue.bad_weather.keywords,
        vec!["rain", "dust"]
    );
}

#[test]
#[serial]
fn test_blank_weather_key_disables_weather() {
    clear_env();
    env::set_var("WEATHER_API_KEY", "   ");

    let config = MoodFitConfig::from_env().unwrap();
    clear_env();

    assert!(config.weather.api_key.is_none());
}

#[test]
#[serial]
fn test_zero_top_n_is_rejected() {
    clear_env();
    env::set_var("MOODFIT_TOP_N", "0");

    let err = MoodFitConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
    assert_eq!(err.context.resource_id.as_deref(), Some("MOODFIT_TOP_N"));
}

#[test]
#[serial]
fn test_unparseable_values_are_rejected() {
    clear_env();
    env::set_var("WEATHER_TIMEOUT_SECS", "soon");

    let err = MoodFitConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("WEATHER_TIMEOUT_SECS"));
}

#[test]
#[serial]
fn test_invalid_intelligence_thresholds_are_rejected() {
    clear_env();
    env::set_var("MOODFIT_HIGH_AROUSAL_THRESHOLD", "2.0");
    env::set_var("MOODFIT_MEDIUM_AROUSAL_THRESHOLD", "3.0");

    let result = MoodFitConfig::from_env();
    clear_env();

    assert_eq!(result.unwrap_err().code, ErrorCode::ConfigError);
}
