// ABOUTME: Intelligence configuration container with env overrides and validation
// ABOUTME: Groups inference thresholds, candidate policy, venue rules and emotion vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Every constant the recommendation core depends on lives here, with
//! defaults that reproduce the documented behavior. `load()` applies
//! `MOODFIT_*` environment overrides on top of the defaults and validates
//! the result. The configuration is an explicit value handed to the engine,
//! there is no process-wide instance.

mod candidates;
mod emotions;
mod error;
mod inference;
mod weather;

pub use candidates::CandidateConfig;
pub use emotions::EmotionConfig;
pub use error::ConfigError;
pub use inference::InferenceConfig;
pub use weather::{BadWeatherConfig, VenueConfig, VenueMessages, VENUE_PLACEHOLDER};

use std::env;
use std::str::FromStr;

use moodfit_core::constants::defaults;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Highest arousal score in the emotion scale
const MAX_AROUSAL: f64 = 5.0;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Intensity inference thresholds
    pub inference: InferenceConfig,
    /// Candidate filter policy
    pub candidates: CandidateConfig,
    /// Weather-aware venue resolution
    pub venue: VenueConfig,
    /// Emotion vocabulary
    pub emotions: EmotionConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            high = config.inference.high_arousal_threshold,
            medium = config.inference.medium_arousal_threshold,
            min_exact = config.candidates.min_exact_matches,
            "Loaded intelligence configuration"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let inference = &self.inference;
        for (value, name) in [
            (inference.high_arousal_threshold, "high_arousal_threshold must be within [0, 5]"),
            (inference.medium_arousal_threshold, "medium_arousal_threshold must be within [0, 5]"),
            (inference.default_arousal, "default_arousal must be within [0, 5]"),
        ] {
            if !(0.0..=MAX_AROUSAL).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(name));
            }
        }

        if inference.medium_arousal_threshold >= inference.high_arousal_threshold {
            return Err(ConfigError::InvalidRange(
                "medium_arousal_threshold must be < high_arousal_threshold",
            ));
        }

        if !(0.0..=defaults::MAX_SLEEP_HOURS).contains(&inference.sleep_deficit_hours) {
            return Err(ConfigError::ValueOutOfRange(
                "sleep_deficit_hours must be within [0, 24]",
            ));
        }

        if !inference.long_session_minutes.is_finite() || inference.long_session_minutes < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "long_session_minutes must be a non-negative number",
            ));
        }

        if self.candidates.min_exact_matches == 0 {
            return Err(ConfigError::ValueOutOfRange("min_exact_matches must be >= 1"));
        }

        if self.venue.bad_weather.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::MissingField("venue.bad_weather.keywords"));
        }

        if self.emotions.arousal_scores.is_empty() {
            return Err(ConfigError::MissingField("emotions.arousal_scores"));
        }

        if self
            .emotions
            .arousal_scores
            .values()
            .any(|score| !(1..=5).contains(score))
        {
            return Err(ConfigError::ValueOutOfRange(
                "emotion arousal scores must be within [1, 5]",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Inference thresholds
        Self::apply_env_var(
            "MOODFIT_HIGH_AROUSAL_THRESHOLD",
            &mut self.inference.high_arousal_threshold,
        )?;
        Self::apply_env_var(
            "MOODFIT_MEDIUM_AROUSAL_THRESHOLD",
            &mut self.inference.medium_arousal_threshold,
        )?;
        Self::apply_env_var(
            "MOODFIT_DEFAULT_AROUSAL",
            &mut self.inference.default_arousal,
        )?;
        Self::apply_env_var(
            "MOODFIT_SLEEP_DEFICIT_HOURS",
            &mut self.inference.sleep_deficit_hours,
        )?;
        Self::apply_env_var(
            "MOODFIT_LONG_SESSION_MINUTES",
            &mut self.inference.long_session_minutes,
        )?;

        // Candidate policy
        Self::apply_env_var(
            "MOODFIT_MIN_EXACT_CANDIDATES",
            &mut self.candidates.min_exact_matches,
        )?;

        // Comma-separated keyword list
        if let Ok(val) = env::var("MOODFIT_BAD_WEATHER_KEYWORDS") {
            self.venue.bad_weather.keywords = val
                .split(',')
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut config = IntelligenceConfig::default();
        config.inference.medium_arousal_threshold = 4.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_zero_min_exact_rejected() {
        let mut config = IntelligenceConfig::default();
        config.candidates.min_exact_matches = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let mut config = IntelligenceConfig::default();
        config.venue.bad_weather.keywords = vec![" ".to_owned()];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField(_))
        ));
    }
}
