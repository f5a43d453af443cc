// ABOUTME: End-to-end recommendation flow from stored profile and check-in to persisted top-N
// ABOUTME: Resolves I/O up front, runs the pure engine, ranks and records the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Service
//!
//! `recommend` is the whole pipeline for one user and date:
//!
//! 1. load the profile and the daily check-in (with date fallback)
//! 2. fetch the weather, degrading to `unknown`
//! 3. prepare the context with the engine against one catalog snapshot
//! 4. rank the candidates, falling back to candidate order if the ranker's
//!    backend is unreachable
//! 5. store the ranked list
//!
//! Degraded modes never fail the request; they appear in `warnings`.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use moodfit_core::constants::{ranking as ranking_defaults, weather as weather_defaults};
use moodfit_core::models::{ArousalLevel, EffectiveVenue, IntensityTier, RankedExercise};
use moodfit_intelligence::{
    Adjustment, RecommendationContext, RecommendationEngine, RecommendationRequest, SelectionMode,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::CatalogStore;
use crate::config::MoodFitConfig;
use crate::database::{Database, RecommendationMeta};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::ranking::{CandidateOrderRanker, RankingCollaborator};
use crate::weather::{OpenWeatherMapClient, WeatherProvider, WeatherReading};

/// Shown when the request date had no check-in
fn date_fallback_warning(used: NaiveDate) -> String {
    format!("선택한 날짜 기록이 없어 {used} 기록을 기준으로 추천합니다.")
}

const WEATHER_UNKNOWN_WARNING: &str = "날씨 정보를 가져오지 못해 날씨를 고려하지 않고 추천합니다.";

/// Decision summary returned with each recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextSummary {
    /// Target tier
    pub tier: IntensityTier,
    /// Base tier before adjustments
    pub base_tier: IntensityTier,
    /// Arousal value used
    pub arousal: f64,
    /// Whether arousal came from recognized emotions
    pub arousal_from_emotions: bool,
    /// Categorical arousal, absent when no emotion was recognized
    pub arousal_level: Option<ArousalLevel>,
    /// Rules that changed the tier, in order
    pub adjustments: Vec<Adjustment>,
    /// Effective venue
    pub venue: EffectiveVenue,
    /// Venue explanation
    pub venue_message: String,
    /// Purpose label
    pub purpose: String,
    /// Candidate selection mode
    pub selection: SelectionMode,
    /// Number of candidates handed to the ranker
    pub candidates: usize,
}

impl From<&RecommendationContext> for ContextSummary {
    fn from(context: &RecommendationContext) -> Self {
        Self {
            tier: context.intensity.tier,
            base_tier: context.intensity.base,
            arousal: context.intensity.arousal,
            arousal_from_emotions: context.intensity.arousal_from_emotions,
            arousal_level: context.arousal_level,
            adjustments: context.intensity.adjustments.clone(),
            venue: context.venue.venue,
            venue_message: context.venue.message.clone(),
            purpose: context.daily.purpose.label().to_owned(),
            selection: context.selection,
            candidates: context.candidates.len(),
        }
    }
}

/// Result of one recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationOutcome {
    /// User name
    pub user: String,
    /// Date asked for
    pub requested_date: NaiveDate,
    /// Date of the check-in used
    pub used_date: NaiveDate,
    /// Weather at request time
    pub weather: WeatherReading,
    /// Engine decisions
    pub summary: ContextSummary,
    /// Ranked picks, rank 1 first
    pub recommendations: Vec<RankedExercise>,
    /// User-visible degraded-mode notices
    pub warnings: Vec<String>,
}

/// Runs recommendations against stored data
pub struct RecommendationService {
    database: Database,
    catalog: Arc<CatalogStore>,
    engine: RecommendationEngine,
    weather: Arc<dyn WeatherProvider>,
    ranker: Arc<dyn RankingCollaborator>,
    fallback: CandidateOrderRanker,
    top_n: usize,
    default_city: String,
}

impl RecommendationService {
    /// Assemble a service from its collaborators
    #[must_use]
    pub fn new(
        database: Database,
        catalog: Arc<CatalogStore>,
        engine: RecommendationEngine,
        weather: Arc<dyn WeatherProvider>,
        ranker: Arc<dyn RankingCollaborator>,
    ) -> Self {
        Self {
            database,
            catalog,
            engine,
            weather,
            ranker,
            fallback: CandidateOrderRanker::default(),
            top_n: ranking_defaults::DEFAULT_TOP_N,
            default_city: weather_defaults::DEFAULT_CITY.to_owned(),
        }
    }

    /// Set how many picks are returned
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the city used when none is given
    #[must_use]
    pub fn with_default_city(mut self, city: impl Into<String>) -> Self {
        self.default_city = city.into();
        self
    }

    /// Build the production service: file database, CSV catalog,
    /// `OpenWeatherMap` weather and candidate-order ranking
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the catalog is invalid
    pub async fn from_config(config: &MoodFitConfig) -> AppResult<Self> {
        let database = Database::connect(&config.database_url).await?;
        let catalog = Arc::new(CatalogStore::open(&config.catalog_path)?);
        let engine = RecommendationEngine::new(config.intelligence.clone());
        let weather = Arc::new(OpenWeatherMapClient::new(&config.weather));
        let ranker = Arc::new(CandidateOrderRanker::default());

        Ok(
            Self::new(database, catalog, engine, weather, ranker)
                .with_top_n(config.top_n)
                .with_default_city(config.weather.default_city.clone()),
        )
    }

    /// Database handle
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.database
    }

    /// Catalog holder
    #[must_use]
    pub const fn catalog(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }

    /// Recommend exercises for `user_name` on `date`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user or a user without any
    /// check-in, `NoCandidates` when nothing fits even after widening, and
    /// storage errors from persisting the result.
    pub async fn recommend(
        &self,
        user_name: &str,
        date: NaiveDate,
        city: Option<&str>,
    ) -> AppResult<RecommendationOutcome> {
        let profile = self
            .database
            .profiles()
            .get_profile(user_name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{user_name}'")).with_user(user_name))?;

        let found = self
            .database
            .daily_states()
            .find_daily_state(user_name, date)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Daily state for '{user_name}'"))
                    .with_user(user_name)
                    .with_resource_id(date.to_string())
            })?;

        let mut warnings = Vec::new();
        if found.is_fallback() {
            warnings.push(date_fallback_warning(found.used));
        }

        let city = city.unwrap_or(&self.default_city);
        let reading = self.weather.current(city).await;
        if reading.is_unknown() {
            warnings.push(WEATHER_UNKNOWN_WARNING.to_owned());
        }

        let request = RecommendationRequest::from_record(
            profile,
            &found.record,
            reading.condition.clone(),
            reading.temperature_celsius,
        );
        let snapshot = self.catalog.snapshot();
        let context = self.engine.prepare(&request, snapshot.exercises())?;
        warnings.extend(context.warnings.iter().cloned());

        let recommendations = self.rank(&context, &mut warnings).await?;

        let started = Instant::now();
        let saved = self
            .database
            .recommendations()
            .save_recommendations(
                user_name,
                found.used,
                &recommendations,
                &RecommendationMeta::from_context(&context),
            )
            .await;
        AppLogger::log_database_operation(
            "save_recommendations",
            "recommendations",
            saved.is_ok(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        saved?;

        for warning in &warnings {
            AppLogger::log_degraded(user_name, warning);
        }
        AppLogger::log_recommendation(
            user_name,
            context.target_tier().label(),
            context.candidates.len(),
            recommendations.len(),
        );

        Ok(RecommendationOutcome {
            user: user_name.to_owned(),
            requested_date: date,
            used_date: found.used,
            weather: reading,
            summary: ContextSummary::from(&context),
            recommendations,
            warnings,
        })
    }

    async fn rank(
        &self,
        context: &RecommendationContext,
        warnings: &mut Vec<String>,
    ) -> AppResult<Vec<RankedExercise>> {
        match self.ranker.rank(context, self.top_n).await {
            Ok(ranked) if !ranked.is_empty() => Ok(ranked),
            Ok(_) => {
                debug!("Ranker returned nothing, using candidate order");
                Ok(self.fallback.rank_now(context, self.top_n))
            }
            Err(e)
                if matches!(
                    e.code,
                    ErrorCode::ExternalServiceError | ErrorCode::ExternalServiceUnavailable
                ) =>
            {
                warn!(error = %e, "Ranking backend failed, using candidate order");
                warnings.push(e.message.clone());
                Ok(self.fallback.rank_now(context, self.top_n))
            }
            Err(e) => Err(e),
        }
    }
}
