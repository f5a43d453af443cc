// ABOUTME: Stored top-N recommendations per user and date with the conditions they were made under
// ABOUTME: Saving replaces the previous list for that date inside one transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Utc};
use moodfit_core::models::{IntensityTier, RankedExercise};
use moodfit_intelligence::RecommendationContext;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::info;

use super::daily::{format_date, parse_date};
use super::ensure_user;
use crate::errors::{AppError, AppResult};

/// Conditions a recommendation list was produced under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMeta {
    /// Target intensity tier
    pub tier: IntensityTier,
    /// Weather condition
    pub weather_condition: String,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Effective venue label
    pub venue: String,
    /// Purpose label
    pub purpose: String,
}

impl RecommendationMeta {
    /// Conditions taken from a prepared context
    #[must_use]
    pub fn from_context(context: &RecommendationContext) -> Self {
        Self {
            tier: context.target_tier(),
            weather_condition: context.weather.condition.clone(),
            temperature_celsius: context.weather.temperature_celsius,
            venue: context.venue.venue.label().to_owned(),
            purpose: context.daily.purpose.label().to_owned(),
        }
    }
}

/// One stored recommendation row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecommendation {
    /// Date the recommendation is for
    pub date: NaiveDate,
    /// Rank, 1 is best
    pub rank: usize,
    /// Exercise name
    pub name: String,
    /// Justification
    pub reason: String,
    /// Conditions
    pub meta: RecommendationMeta,
}

/// Recommendation table manager
#[derive(Clone)]
pub struct RecommendationManager {
    pool: SqlitePool,
}

impl RecommendationManager {
    /// Create a new recommendation manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store ranked items for `user_name` on `date`, renumbered 1..=N
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user and `DatabaseError` if
    /// the transaction fails
    pub async fn save_recommendations(
        &self,
        user_name: &str,
        date: NaiveDate,
        items: &[RankedExercise],
        meta: &RecommendationMeta,
    ) -> AppResult<()> {
        ensure_user(&self.pool, user_name).await?;
        let day = format_date(date);
        let created_at = Utc::now().to_rfc3339();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("DELETE FROM recommendations WHERE user_name = $1 AND date = $2")
            .bind(user_name)
            .bind(&day)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear recommendations: {e}")))?;

        for (index, item) in items.iter().enumerate() {
            let rank = i64::try_from(index + 1)
                .map_err(|e| AppError::internal(format!("Rank overflow: {e}")))?;
            sqlx::query(
                r"
                INSERT INTO recommendations (
                    user_name, date, rank, exercise_name, reason, tier,
                    weather_condition, temperature_celsius, venue, purpose, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                ",
            )
            .bind(user_name)
            .bind(&day)
            .bind(rank)
            .bind(&item.name)
            .bind(&item.reason)
            .bind(meta.tier.as_str())
            .bind(&meta.weather_condition)
            .bind(meta.temperature_celsius)
            .bind(&meta.venue)
            .bind(&meta.purpose)
            .bind(&created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to save recommendation: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit recommendations: {e}")))?;

        info!(user = user_name, %date, count = items.len(), "Saved recommendations");
        Ok(())
    }

    /// Stored recommendations for a date, ordered by rank
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_recommendations(
        &self,
        user_name: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<StoredRecommendation>> {
        let rows = sqlx::query(
            r"
            SELECT date, rank, exercise_name, reason, tier,
                   weather_condition, temperature_celsius, venue, purpose
            FROM recommendations
            WHERE user_name = $1 AND date = $2
            ORDER BY rank
            ",
        )
        .bind(user_name)
        .bind(format_date(date))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recommendations: {e}")))?;

        rows.iter().map(row_to_recommendation).collect()
    }
}

fn row_to_recommendation(row: &SqliteRow) -> AppResult<StoredRecommendation> {
    let date: String = row.get("date");
    let rank: i64 = row.get("rank");
    let tier: String = row.get("tier");

    Ok(StoredRecommendation {
        date: parse_date(&date)?,
        rank: usize::try_from(rank)
            .map_err(|e| AppError::database(format!("Stored rank {rank} is invalid: {e}")))?,
        name: row.get("exercise_name"),
        reason: row.get("reason"),
        meta: RecommendationMeta {
            tier: IntensityTier::parse(&tier)
                .ok_or_else(|| AppError::database(format!("Stored tier '{tier}' is invalid")))?,
            weather_condition: row.get("weather_condition"),
            temperature_celsius: row.get("temperature_celsius"),
            venue: row.get("venue"),
            purpose: row.get("purpose"),
        },
    })
}
