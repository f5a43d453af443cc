// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, an in-memory database, catalog and check-in fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `moodfit`

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use chrono::NaiveDate;
use moodfit::database::Database;
use moodfit_core::models::{DailyStateRecord, Exercise, IntensityTier, UserProfile};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh migrated in-memory database
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::connect("sqlite::memory:").await.unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Check-in with only emotions set
pub fn checkin(day: NaiveDate, emotions: &str) -> DailyStateRecord {
    DailyStateRecord {
        emotions: Some(emotions.to_owned()),
        ..DailyStateRecord::new(day)
    }
}

pub fn profile(name: &str) -> UserProfile {
    UserProfile::new(name)
}

/// Small catalog covering every tier for 체력 향상 and a few other purposes
///
/// 체력 향상 has 3 low, 5 medium and 2 high exercises.
pub fn sample_catalog() -> Vec<Exercise> {
    vec![
        Exercise::new("빠르게 걷기", IntensityTier::Low, &["체력 향상", "체중 감량"]),
        Exercise::new("요가", IntensityTier::Low, &["체력 향상", "스트레스 해소"]),
        Exercise::new("스트레칭", IntensityTier::Low, &["체력 향상", "체형 교정"]),
        Exercise::new("자전거", IntensityTier::Medium, &["체력 향상"]),
        Exercise::new("조깅", IntensityTier::Medium, &["체력 향상", "체중 감량"]),
        Exercise::new("수영", IntensityTier::Medium, &["체력 향상"]),
        Exercise::new("계단 오르기", IntensityTier::Medium, &["체력 향상"]),
        Exercise::new("줄넘기", IntensityTier::Medium, &["체력 향상", "체중 감량"]),
        Exercise::new("버피", IntensityTier::High, &["체력 향상"]),
        Exercise::new("인터벌 러닝", IntensityTier::High, &["체력 향상", "체중 감량"]),
        Exercise::new("필라테스", IntensityTier::Medium, &["체형 교정", "스트레스 해소"]),
        Exercise::new("복싱", IntensityTier::High, &["스트레스 해소"]),
    ]
}

pub const CATALOG_HEADER: &str = "운동명,운동강도,운동목적,감정매핑,단위체중당에너지소비량";

/// CSV rendering of a few catalog rows with deliberately messy cells
pub fn sample_catalog_csv() -> String {
    [
        CATALOG_HEADER,
        r#"빠르게 걷기,저강도,"체력 향상, 체중 감량","차분함,피로",0.06"#,
        r#"요가," 저 강도 ,","체력 향상,스트레스 해소",차분함,0.04"#,
        r#"조깅,중강도,"체력 향상,체중 감량","활력,행복",0.12"#,
        r#"자전거,중강도,체력 향상,집중,n/a"#,
        r#"버피,"고강도,,",체력 향상,"분노,활력",0.2"#,
    ]
    .join("\n")
}

pub fn write_catalog(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("workout.csv");
    fs::write(&path, contents).unwrap();
    path
}
