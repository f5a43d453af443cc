// ABOUTME: SQLite persistence for profiles, daily check-ins, recommendations and evaluations
// ABOUTME: Owns the connection pool, runs schema migrations and hands out per-table managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database
//!
//! One SQLite database with four tables. Each table has a small manager
//! holding a clone of the pool, following the same shape for every query:
//! bind, fetch, map the driver error into `DatabaseError`.

mod daily;
mod evaluations;
mod profiles;
mod recommendations;

pub use daily::{DailyStateManager, FoundDailyState};
pub use evaluations::EvaluationManager;
pub use profiles::ProfileManager;
pub use recommendations::{RecommendationManager, RecommendationMeta, StoredRecommendation};

use std::fs;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};

/// In-memory databases live per connection, so the pool must hold exactly one
const MEMORY_POOL_SIZE: u32 = 1;
const FILE_POOL_SIZE: u32 = 5;

/// Database handle shared by the service and the CLI
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to `database_url`, creating the file if missing, and migrate
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a malformed URL and `DatabaseError` when the
    /// connection or a migration fails.
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid database URL '{database_url}': {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = database_url.contains(":memory:");
        if !in_memory {
            if let Some(parent) = options.get_filename().parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory {
                MEMORY_POOL_SIZE
            } else {
                FILE_POOL_SIZE
            })
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        info!(in_memory, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Profile table operations
    #[must_use]
    pub fn profiles(&self) -> ProfileManager {
        ProfileManager::new(self.pool.clone())
    }

    /// Daily check-in operations
    #[must_use]
    pub fn daily_states(&self) -> DailyStateManager {
        DailyStateManager::new(self.pool.clone())
    }

    /// Stored recommendation operations
    #[must_use]
    pub fn recommendations(&self) -> RecommendationManager {
        RecommendationManager::new(self.pool.clone())
    }

    /// Evaluation operations
    #[must_use]
    pub fn evaluations(&self) -> EvaluationManager {
        EvaluationManager::new(self.pool.clone())
    }

    /// Create all tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to run migration: {e}")))?;
        }
        debug!(statements = SCHEMA.len(), "Schema migrated");
        Ok(())
    }
}

const SCHEMA: [&str; 7] = [
    r"
    CREATE TABLE IF NOT EXISTS user_profiles (
        name TEXT PRIMARY KEY,
        age INTEGER,
        gender TEXT,
        height_cm REAL,
        weight_kg REAL,
        activity_level TEXT NOT NULL,
        has_injury INTEGER NOT NULL DEFAULT 0,
        injury_details TEXT NOT NULL DEFAULT '[]',
        created_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS daily_states (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_name TEXT NOT NULL REFERENCES user_profiles(name) ON DELETE CASCADE,
        date TEXT NOT NULL,
        emotions TEXT NOT NULL,
        sleep_hours REAL,
        available_minutes REAL,
        stress TEXT,
        purpose TEXT,
        venue TEXT,
        equipment TEXT,
        recorded_at TEXT NOT NULL
    )
    ",
    r"
    CREATE INDEX IF NOT EXISTS idx_daily_states_user_date
        ON daily_states(user_name, date)
    ",
    r"
    CREATE TABLE IF NOT EXISTS recommendations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_name TEXT NOT NULL REFERENCES user_profiles(name) ON DELETE CASCADE,
        date TEXT NOT NULL,
        rank INTEGER NOT NULL,
        exercise_name TEXT NOT NULL,
        reason TEXT NOT NULL,
        tier TEXT NOT NULL,
        weather_condition TEXT NOT NULL,
        temperature_celsius REAL NOT NULL,
        venue TEXT NOT NULL,
        purpose TEXT NOT NULL,
        created_at TEXT NOT NULL,
        UNIQUE (user_name, date, rank)
    )
    ",
    r"
    CREATE INDEX IF NOT EXISTS idx_recommendations_user_date
        ON recommendations(user_name, date)
    ",
    r"
    CREATE TABLE IF NOT EXISTS evaluations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_name TEXT NOT NULL REFERENCES user_profiles(name) ON DELETE CASCADE,
        date TEXT NOT NULL,
        ratings TEXT NOT NULL,
        survey TEXT NOT NULL,
        liked TEXT NOT NULL,
        improvement TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    ",
    r"
    CREATE INDEX IF NOT EXISTS idx_evaluations_user_date
        ON evaluations(user_name, date)
    ",
];

/// Fail with `ResourceNotFound` unless `user_name` is registered
pub(crate) async fn ensure_user(pool: &SqlitePool, user_name: &str) -> AppResult<()> {
    let exists: Option<i64> = sqlx::query_scalar("SELECT 1 FROM user_profiles WHERE name = $1")
        .bind(user_name)
        .fetch_optional(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to look up user: {e}")))?;

    if exists.is_none() {
        return Err(AppError::not_found(format!("User '{user_name}'")).with_user(user_name));
    }
    Ok(())
}
