// ABOUTME: Recommendation engine composing inference, venue resolution and candidate filtering
// ABOUTME: Pure and synchronous, batch evaluation runs requests in parallel over one catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Engine
//!
//! `prepare` turns one request into the context handed to a ranking
//! collaborator. It performs no I/O: profile, daily state, weather and the
//! catalog snapshot are all resolved by the caller beforehand.

use moodfit_core::errors::AppResult;
use moodfit_core::models::{
    ArousalLevel, DailyState, DailyStateRecord, Exercise, IntensityTier, UserProfile,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::arousal::EmotionCatalog;
use crate::candidates::{CandidateFilter, SelectionMode};
use crate::config::IntelligenceConfig;
use crate::intensity::{IntensityDecision, IntensityInferencer};
use crate::normalization::normalize;
use crate::venue::{VenueResolution, VenueResolver};

/// Weather as seen by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Lowercase condition, `unknown` when unavailable
    pub condition: String,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
}

/// Everything the engine needs for one recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// User profile
    pub profile: UserProfile,
    /// Normalized daily state
    pub daily: DailyState,
    /// Current weather
    pub weather: WeatherSnapshot,
}

impl RecommendationRequest {
    /// Build a request, normalizing the raw daily record
    pub fn from_record(
        profile: UserProfile,
        record: &DailyStateRecord,
        condition: impl Into<String>,
        temperature_celsius: f64,
    ) -> Self {
        Self {
            profile,
            daily: normalize(record),
            weather: WeatherSnapshot {
                condition: condition.into(),
                temperature_celsius,
            },
        }
    }
}

/// Engine output consumed by the ranking collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationContext {
    /// User profile
    pub profile: UserProfile,
    /// Normalized daily state
    pub daily: DailyState,
    /// Weather used for venue resolution
    pub weather: WeatherSnapshot,
    /// Intensity decision with applied rules
    pub intensity: IntensityDecision,
    /// Categorical arousal level, `None` when no emotion was recognized
    pub arousal_level: Option<ArousalLevel>,
    /// Effective venue
    pub venue: VenueResolution,
    /// Candidate exercises in catalog order
    pub candidates: Vec<Exercise>,
    /// How candidates were selected
    pub selection: SelectionMode,
    /// User-visible warnings for degraded modes
    pub warnings: Vec<String>,
}

impl RecommendationContext {
    /// Target tier
    #[must_use]
    pub const fn target_tier(&self) -> IntensityTier {
        self.intensity.tier
    }

    /// Arousal value
    #[must_use]
    pub const fn arousal(&self) -> f64 {
        self.intensity.arousal
    }

    /// Owned equipment
    #[must_use]
    pub fn equipment(&self) -> &[String] {
        &self.daily.equipment
    }

    /// Whether a candidate with this exact name exists
    #[must_use]
    pub fn has_candidate(&self, name: &str) -> bool {
        self.candidates.iter().any(|e| e.name == name)
    }
}

/// Composes the recommendation core
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: IntelligenceConfig,
    emotions: EmotionCatalog,
}

impl RecommendationEngine {
    /// Create an engine whose emotion vocabulary comes from the configuration
    #[must_use]
    pub fn new(config: IntelligenceConfig) -> Self {
        let emotions = EmotionCatalog::from_config(&config.emotions);
        Self { config, emotions }
    }

    /// Replace the emotion vocabulary
    #[must_use]
    pub fn with_emotions(mut self, emotions: EmotionCatalog) -> Self {
        self.emotions = emotions;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Active emotion vocabulary
    #[must_use]
    pub const fn emotions(&self) -> &EmotionCatalog {
        &self.emotions
    }

    /// Inferencer bound to this engine's configuration
    #[must_use]
    pub const fn inferencer(&self) -> IntensityInferencer<'_> {
        IntensityInferencer::new(&self.config.inference, &self.emotions)
    }

    /// Venue resolver bound to this engine's configuration
    #[must_use]
    pub const fn venue_resolver(&self) -> VenueResolver<'_> {
        VenueResolver::new(&self.config.venue)
    }

    /// Candidate filter bound to this engine's configuration
    #[must_use]
    pub const fn candidate_filter(&self) -> CandidateFilter<'_> {
        CandidateFilter::new(&self.config.candidates)
    }

    /// Run inference, venue resolution and candidate filtering for one request
    ///
    /// # Errors
    ///
    /// Returns `NoCandidates` when candidate selection is empty after widening;
    /// the caller must stop the recommendation flow.
    pub fn prepare(
        &self,
        request: &RecommendationRequest,
        catalog: &[Exercise],
    ) -> AppResult<RecommendationContext> {
        let intensity = self.inferencer().explain(&request.daily, &request.profile);
        let arousal_level = self
            .emotions
            .aggregate_with_level(&request.daily.emotions)
            .map(|(_, level)| level);

        let venue = self
            .venue_resolver()
            .resolve_preference(request.daily.venue, &request.weather.condition);

        let mut warnings = Vec::new();
        let purpose = request.daily.purpose.label();
        let set = self
            .candidate_filter()
            .select(catalog, purpose, intensity.tier, &mut warnings)
            .map_err(|e| e.with_user(request.profile.name.clone()))?;

        debug!(
            user = %request.profile.name,
            tier = intensity.tier.as_str(),
            venue = venue.venue.label(),
            candidates = set.len(),
            "Prepared recommendation context"
        );

        Ok(RecommendationContext {
            profile: request.profile.clone(),
            daily: request.daily.clone(),
            weather: request.weather.clone(),
            arousal_level,
            venue,
            candidates: set.exercises.into_iter().cloned().collect(),
            selection: set.mode,
            intensity,
            warnings,
        })
    }

    /// Prepare many requests in parallel against one catalog snapshot
    ///
    /// Results are returned in request order.
    #[must_use]
    pub fn prepare_batch(
        &self,
        requests: &[RecommendationRequest],
        catalog: &[Exercise],
    ) -> Vec<AppResult<RecommendationContext>> {
        let results: Vec<_> = requests
            .par_iter()
            .map(|request| self.prepare(request, catalog))
            .collect();
        info!(
            requests = requests.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "Prepared recommendation batch"
        );
        results
    }
}
