// ABOUTME: Environment configuration for storage paths, weather access and ranking size
// ABOUTME: Reads DATABASE_URL, MOODFIT_* and WEATHER_* variables with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Configuration comes only from process environment variables; no `.env`
//! file is read implicitly.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use moodfit_core::constants::{ranking, weather};
use moodfit_intelligence::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppResult};

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/moodfit.db";

/// Default exercise catalog location
pub const DEFAULT_CATALOG_PATH: &str = "./data/workout.csv";

/// Weather provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSettings {
    /// API key, weather lookups are skipped when absent
    pub api_key: Option<String>,
    /// Current-weather endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// City used when none is given
    pub default_city: String,
}

impl WeatherSettings {
    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: weather::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: weather::DEFAULT_TIMEOUT_SECS,
            default_city: weather::DEFAULT_CITY.to_owned(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodFitConfig {
    /// sqlx connection string
    pub database_url: String,
    /// Exercise catalog CSV
    pub catalog_path: PathBuf,
    /// Weather provider settings
    pub weather: WeatherSettings,
    /// Ranked picks per recommendation
    pub top_n: usize,
    /// Recommendation core configuration
    pub intelligence: IntelligenceConfig,
}

impl Default for MoodFitConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            weather: WeatherSettings::default(),
            top_n: ranking::DEFAULT_TOP_N,
            intelligence: IntelligenceConfig::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::config(format!("{name} has an invalid value: '{raw}'")).with_resource_id(name)
        }),
        Err(_) => Ok(default),
    }
}

impl MoodFitConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a variable cannot be parsed, when
    /// `MOODFIT_TOP_N` is zero, or when the intelligence configuration fails
    /// validation.
    pub fn from_env() -> AppResult<Self> {
        let defaults = WeatherSettings::default();
        let weather = WeatherSettings {
            api_key: env::var("WEATHER_API_KEY")
                .ok()
                .map(|k| k.trim().to_owned())
                .filter(|k| !k.is_empty()),
            base_url: env::var("WEATHER_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: parse_var("WEATHER_TIMEOUT_SECS", defaults.timeout_secs)?,
            default_city: env::var("MOODFIT_DEFAULT_CITY").unwrap_or(defaults.default_city),
        };

        let top_n = parse_var("MOODFIT_TOP_N", ranking::DEFAULT_TOP_N)?;
        if top_n == 0 {
            return Err(AppError::config("MOODFIT_TOP_N must be at least 1")
                .with_resource_id("MOODFIT_TOP_N"));
        }

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            catalog_path: env::var("MOODFIT_CATALOG_PATH")
                .map_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from),
            weather,
            top_n,
            intelligence: IntelligenceConfig::load()?,
        };

        info!(
            database_url = %config.database_url,
            catalog = %config.catalog_path.display(),
            weather_enabled = config.weather.api_key.is_some(),
            top_n = config.top_n,
            "Loaded configuration"
        );
        Ok(config)
    }
}
