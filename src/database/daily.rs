// ABOUTME: Append-only daily check-ins with date fallback lookup
// ABOUTME: Raw fields are stored as entered so defaults are applied once, at normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Utc};
use moodfit_core::models::DailyStateRecord;
use moodfit_intelligence::split_list;
use serde::Serialize;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::{debug, info};

use super::ensure_user;
use crate::errors::{AppError, AppResult, ErrorCode};

const DATE_FORMAT: &str = "%Y-%m-%d";

// Re-submitting a day's check-in corrects it, so the newest row wins
const EXACT_DATE: &str = r"
    SELECT date, emotions, sleep_hours, available_minutes,
           stress, purpose, venue, equipment
    FROM daily_states
    WHERE user_name = $1 AND date = $2
    ORDER BY id DESC
    LIMIT 1
";

const LATEST_ON_OR_BEFORE: &str = r"
    SELECT date, emotions, sleep_hours, available_minutes,
           stress, purpose, venue, equipment
    FROM daily_states
    WHERE user_name = $1 AND date <= $2
    ORDER BY date DESC, id DESC
    LIMIT 1
";

const LATEST_ANY: &str = r"
    SELECT date, emotions, sleep_hours, available_minutes,
           stress, purpose, venue, equipment
    FROM daily_states
    WHERE user_name = $1
    ORDER BY date DESC, id DESC
    LIMIT 1
";

/// Daily record found for a requested date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundDailyState {
    /// Date that was asked for
    pub requested: NaiveDate,
    /// Date of the record actually used
    pub used: NaiveDate,
    /// Stored record
    pub record: DailyStateRecord,
}

impl FoundDailyState {
    /// True when the record is from a different date than requested
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.requested != self.used
    }
}

/// Daily check-in table manager
#[derive(Clone)]
pub struct DailyStateManager {
    pool: SqlitePool,
}

impl DailyStateManager {
    /// Create a new daily state manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a check-in for a registered user, returning its row id
    ///
    /// Later check-ins on the same date take precedence on lookup.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user, `MissingRequiredField`
    /// when no emotion is given and `DatabaseError` if the insert fails
    pub async fn record_daily_state(
        &self,
        user_name: &str,
        record: &DailyStateRecord,
    ) -> AppResult<i64> {
        ensure_user(&self.pool, user_name).await?;

        let emotions = record.emotions.as_deref().map(split_list).unwrap_or_default();
        if emotions.is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "at least one emotion is required",
            )
            .with_user(user_name)
            .with_resource_id(record.date.to_string()));
        }

        let result = sqlx::query(
            r"
            INSERT INTO daily_states (
                user_name, date, emotions, sleep_hours, available_minutes,
                stress, purpose, venue, equipment, recorded_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(user_name)
        .bind(format_date(record.date))
        .bind(emotions.join(","))
        .bind(record.sleep_hours)
        .bind(record.available_minutes)
        .bind(&record.stress)
        .bind(&record.purpose)
        .bind(&record.venue)
        .bind(&record.equipment)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to record daily state: {e}")))?;

        info!(user = user_name, date = %record.date, "Recorded daily state");
        Ok(result.last_insert_rowid())
    }

    /// Find the record for `date`, else the latest before it, else the latest overall
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails or a stored date is corrupt
    pub async fn find_daily_state(
        &self,
        user_name: &str,
        date: NaiveDate,
    ) -> AppResult<Option<FoundDailyState>> {
        let day = format_date(date);
        let row = match self.lookup(EXACT_DATE, user_name, Some(&day)).await? {
            Some(row) => Some(row),
            None => match self.lookup(LATEST_ON_OR_BEFORE, user_name, Some(&day)).await? {
                Some(row) => Some(row),
                None => self.lookup(LATEST_ANY, user_name, None).await?,
            },
        };

        let Some(row) = row else {
            return Ok(None);
        };
        let record = row_to_record(&row)?;
        if record.date != date {
            debug!(
                user = user_name,
                requested = %date,
                used = %record.date,
                "Using daily state from another date"
            );
        }
        Ok(Some(FoundDailyState {
            requested: date,
            used: record.date,
            record,
        }))
    }

    async fn lookup(
        &self,
        sql: &'static str,
        user_name: &str,
        day: Option<&str>,
    ) -> AppResult<Option<SqliteRow>> {
        let mut query = sqlx::query(sql).bind(user_name);
        if let Some(day) = day {
            query = query.bind(day);
        }
        query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to find daily state: {e}")))
    }

    /// Distinct check-in dates for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_dates(&self, user_name: &str) -> AppResult<Vec<NaiveDate>> {
        let rows: Vec<String> = sqlx::query_scalar(
            r"
            SELECT DISTINCT date FROM daily_states
            WHERE user_name = $1
            ORDER BY date DESC
            ",
        )
        .bind(user_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list daily state dates: {e}")))?;

        rows.iter().map(|d| parse_date(d)).collect()
    }
}

pub(super) fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| AppError::database(format!("Stored date '{value}' is invalid: {e}")))
}

pub(super) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn row_to_record(row: &SqliteRow) -> AppResult<DailyStateRecord> {
    let date: String = row.get("date");
    Ok(DailyStateRecord {
        date: parse_date(&date)?,
        emotions: row.get("emotions"),
        sleep_hours: row.get("sleep_hours"),
        available_minutes: row.get("available_minutes"),
        stress: row.get("stress"),
        purpose: row.get("purpose"),
        venue: row.get("venue"),
        equipment: row.get("equipment"),
    })
}
