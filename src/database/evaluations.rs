// ABOUTME: Post-workout evaluations with per-exercise ratings and the fixed eight-question survey
// ABOUTME: Scores are validated to the 1..=5 scale before anything is written
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Utc};
use moodfit_core::models::Evaluation;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::info;

use super::daily::format_date;
use super::ensure_user;
use crate::errors::{AppError, AppResult};

/// Evaluation table manager
#[derive(Clone)]
pub struct EvaluationManager {
    pool: SqlitePool,
}

impl EvaluationManager {
    /// Create a new evaluation manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Validate and store an evaluation, returning its row id
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a score outside 1..=5,
    /// `ResourceNotFound` for an unknown user and `DatabaseError` if the
    /// insert fails
    pub async fn save_evaluation(
        &self,
        user_name: &str,
        date: NaiveDate,
        evaluation: &Evaluation,
    ) -> AppResult<i64> {
        evaluation.validate().map_err(|e| e.with_user(user_name))?;
        ensure_user(&self.pool, user_name).await?;

        let result = sqlx::query(
            r"
            INSERT INTO evaluations (
                user_name, date, ratings, survey, liked, improvement, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(user_name)
        .bind(format_date(date))
        .bind(serde_json::to_string(&evaluation.ratings)?)
        .bind(serde_json::to_string(&evaluation.survey)?)
        .bind(&evaluation.liked)
        .bind(&evaluation.improvement)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save evaluation: {e}")))?;

        info!(
            user = user_name,
            %date,
            ratings = evaluation.ratings.len(),
            "Saved evaluation"
        );
        Ok(result.last_insert_rowid())
    }

    /// Evaluations submitted for a date, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_evaluations(
        &self,
        user_name: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<Evaluation>> {
        let rows = sqlx::query(
            r"
            SELECT ratings, survey, liked, improvement
            FROM evaluations
            WHERE user_name = $1 AND date = $2
            ORDER BY id
            ",
        )
        .bind(user_name)
        .bind(format_date(date))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get evaluations: {e}")))?;

        rows.iter().map(row_to_evaluation).collect()
    }
}

fn row_to_evaluation(row: &SqliteRow) -> AppResult<Evaluation> {
    let ratings_json: String = row.get("ratings");
    let survey_json: String = row.get("survey");

    Ok(Evaluation {
        ratings: serde_json::from_str(&ratings_json)?,
        survey: serde_json::from_str(&survey_json)?,
        liked: row.get("liked"),
        improvement: row.get("improvement"),
    })
}
