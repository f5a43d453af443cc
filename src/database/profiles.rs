// ABOUTME: Registered user profiles keyed by unique name
// ABOUTME: Registration rejects duplicates, lookups return fully defaulted profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use moodfit_core::models::{injury_label, Level, UserProfile};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::info;

use crate::errors::{AppError, AppResult};

/// Profile table manager
#[derive(Clone)]
pub struct ProfileManager {
    pool: SqlitePool,
}

impl ProfileManager {
    /// Create a new profile manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when the name is taken and
    /// `DatabaseError` if the insert fails
    pub async fn register(&self, profile: &UserProfile) -> AppResult<()> {
        if self.get_profile(&profile.name).await?.is_some() {
            return Err(
                AppError::already_exists(format!("User '{}'", profile.name))
                    .with_user(profile.name.clone()),
            );
        }

        sqlx::query(
            r"
            INSERT INTO user_profiles (
                name, age, gender, height_cm, weight_kg,
                activity_level, has_injury, injury_details, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(&profile.name)
        .bind(profile.age.map(i64::from))
        .bind(&profile.gender)
        .bind(profile.height_cm)
        .bind(profile.weight_kg)
        .bind(profile.activity_level.label())
        .bind(profile.has_injury)
        .bind(serde_json::to_string(&profile.injury_details)?)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to register user: {e}")))?;

        info!(
            user = %profile.name,
            injury = injury_label(profile.has_injury),
            "Registered user profile"
        );
        Ok(())
    }

    /// Get a profile by name
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_profile(&self, name: &str) -> AppResult<Option<UserProfile>> {
        let row = sqlx::query(
            r"
            SELECT name, age, gender, height_cm, weight_kg,
                   activity_level, has_injury, injury_details
            FROM user_profiles
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user profile: {e}")))?;

        row.map(|r| row_to_profile(&r)).transpose()
    }

    /// All profiles ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_profiles(&self) -> AppResult<Vec<UserProfile>> {
        let rows = sqlx::query(
            r"
            SELECT name, age, gender, height_cm, weight_kg,
                   activity_level, has_injury, injury_details
            FROM user_profiles
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list user profiles: {e}")))?;

        rows.iter().map(row_to_profile).collect()
    }
}

fn row_to_profile(row: &SqliteRow) -> AppResult<UserProfile> {
    let age: Option<i64> = row.get("age");
    let activity: String = row.get("activity_level");
    let details_json: String = row.get("injury_details");

    Ok(UserProfile {
        name: row.get("name"),
        age: age.and_then(|a| u32::try_from(a).ok()),
        gender: row.get("gender"),
        height_cm: row.get("height_cm"),
        weight_kg: row.get("weight_kg"),
        activity_level: Level::parse(&activity).unwrap_or_default(),
        has_injury: row.get("has_injury"),
        injury_details: serde_json::from_str(&details_json)?,
    })
}
