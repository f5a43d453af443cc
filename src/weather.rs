// ABOUTME: Weather provider abstraction and OpenWeatherMap current-weather client
// ABOUTME: Any missing key, transport or decode failure degrades to an "unknown" reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weather lookup for venue resolution
//!
//! The recommendation flow never fails because of weather: callers always
//! receive a [`WeatherReading`], which is `unknown` / 0.0 when nothing could
//! be fetched.

use async_trait::async_trait;
use moodfit_core::constants::weather::UNKNOWN_CONDITION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::WeatherSettings;

/// Current weather for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Lowercase main condition (e.g. `rain`, `clear`)
    pub condition: String,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
}

impl WeatherReading {
    /// Reading used when weather is unavailable
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            condition: UNKNOWN_CONDITION.to_owned(),
            temperature_celsius: 0.0,
        }
    }

    /// Whether this is the unavailable placeholder
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.condition == UNKNOWN_CONDITION
    }
}

/// Weather lookup failures, never surfaced past the provider
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport error
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-success status
    #[error("weather API returned status {0}")]
    Status(u16),
    /// Response had no condition entry
    #[error("weather response had no condition")]
    DataUnavailable,
}

/// Source of current weather
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current weather for `city`, `unknown` when unavailable
    async fn current(&self, city: &str) -> WeatherReading;
}

/// Provider returning a preset reading
#[derive(Debug, Clone)]
pub struct FixedWeather(pub WeatherReading);

impl FixedWeather {
    /// Fixed condition and temperature
    pub fn new(condition: impl Into<String>, temperature_celsius: f64) -> Self {
        Self(WeatherReading {
            condition: condition.into().to_lowercase(),
            temperature_celsius,
        })
    }
}

#[async_trait]
impl WeatherProvider for FixedWeather {
    async fn current(&self, _city: &str) -> WeatherReading {
        self.0.clone()
    }
}

/// `OpenWeatherMap` current-weather response
#[derive(Debug, Deserialize)]
struct OpenWeatherCurrent {
    /// Weather condition entries, first is primary
    #[serde(default)]
    weather: Vec<OpenWeatherCondition>,
    /// Main measurements
    main: OpenWeatherMain,
}

/// Weather condition description from `OpenWeatherMap`
#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    /// Main weather category (e.g., "Rain", "Clear")
    main: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    /// Temperature in Celsius with `units=metric`
    temp: f64,
}

/// `OpenWeatherMap` client
pub struct OpenWeatherMapClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenWeatherMapClient {
    /// Create a client from settings
    #[must_use]
    pub fn new(settings: &WeatherSettings) -> Self {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
        }
    }

    async fn fetch(&self, api_key: &str, city: &str) -> Result<WeatherReading, WeatherError> {
        debug!(city, "Fetching current weather");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let body: OpenWeatherCurrent = response.json().await?;
        let condition = body
            .weather
            .first()
            .map(|w| w.main.to_lowercase())
            .ok_or(WeatherError::DataUnavailable)?;

        Ok(WeatherReading {
            condition,
            temperature_celsius: body.main.temp,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapClient {
    async fn current(&self, city: &str) -> WeatherReading {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("Weather API key not configured, skipping lookup");
            return WeatherReading::unknown();
        };

        match self.fetch(api_key, city).await {
            Ok(reading) => reading,
            Err(e) => {
                warn!(city, error = %e, "Weather lookup failed, continuing without weather");
                WeatherReading::unknown()
            }
        }
    }
}
