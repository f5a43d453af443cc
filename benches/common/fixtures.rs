// ABOUTME: Benchmark fixtures generating exercise catalogs and recommendation requests
// ABOUTME: Deterministic data so runs are comparable across machines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for the recommendation engine.

use chrono::NaiveDate;
use moodfit_core::models::{DailyStateRecord, Exercise, IntensityTier, Level, UserProfile};
use moodfit_intelligence::RecommendationRequest;

const PURPOSES: [&str; 4] = ["체력 향상", "체중 감량", "스트레스 해소", "체형 교정"];
const EMOTIONS: [&str; 6] = ["행복", "분노", "슬픔", "불안", "피로", "설렘"];
const CONDITIONS: [&str; 4] = ["clear", "rain", "clouds", "snow"];
const STRESS: [&str; 3] = ["낮음", "보통", "높음"];

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// 10 requests
    Small,
    /// 200 requests, a busy morning
    Large,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Large => 200,
        }
    }
}

const fn tier_for(index: usize) -> IntensityTier {
    match index % 3 {
        0 => IntensityTier::Low,
        1 => IntensityTier::Medium,
        _ => IntensityTier::High,
    }
}

/// Catalog of `size` exercises spread over every purpose and tier
#[must_use]
pub fn generate_catalog(size: usize) -> Vec<Exercise> {
    (0..size)
        .map(|i| {
            let purposes = [PURPOSES[i % PURPOSES.len()], PURPOSES[(i / 3) % PURPOSES.len()]];
            let mut exercise = Exercise::new(format!("exercise-{i}"), tier_for(i), &purposes);
            exercise.emotions = vec![EMOTIONS[i % EMOTIONS.len()].to_owned()];
            exercise
        })
        .collect()
}

/// Requests cycling through emotions, stress, sleep, purposes and weather
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_requests(size: BatchSize) -> Vec<RecommendationRequest> {
    let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
    (0..size.count())
        .map(|i| {
            let mut profile =
                UserProfile::new(format!("user-{i}")).with_activity(match i % 3 {
                    0 => Level::Low,
                    1 => Level::Medium,
                    _ => Level::High,
                });
            if i % 7 == 0 {
                profile = profile.with_injury(vec!["무릎".to_owned()]);
            }
            let record = DailyStateRecord {
                emotions: Some(format!(
                    "{},{}",
                    EMOTIONS[i % EMOTIONS.len()],
                    EMOTIONS[(i + 2) % EMOTIONS.len()]
                )),
                sleep_hours: Some(4.0 + (i % 5) as f64),
                available_minutes: Some(20.0 + (i % 4) as f64 * 15.0),
                stress: Some(STRESS[i % STRESS.len()].to_owned()),
                purpose: Some(PURPOSES[i % PURPOSES.len()].to_owned()),
                venue: Some(if i % 2 == 0 { "실외" } else { "실내" }.to_owned()),
                equipment: None,
                ..DailyStateRecord::new(day)
            };
            RecommendationRequest::from_record(
                profile,
                &record,
                CONDITIONS[i % CONDITIONS.len()],
                18.0,
            )
        })
        .collect()
}
