// ABOUTME: Tests for the composed recommendation engine, single and batch preparation
// ABOUTME: Checks the context handed to ranking and that batches keep request order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use moodfit_core::errors::ErrorCode;
use moodfit_core::models::{
    ArousalLevel, DailyStateRecord, EffectiveVenue, Exercise, IntensityTier,
};
use moodfit_intelligence::config::{CandidateConfig, IntelligenceConfig};
use moodfit_intelligence::{RecommendationEngine, RecommendationRequest, SelectionMode};

fn request(user: &str, record: &DailyStateRecord, condition: &str) -> RecommendationRequest {
    RecommendationRequest::from_record(common::profile(user), record, condition, 20.0)
}

#[test]
fn test_prepare_builds_full_context() {
    let record = DailyStateRecord {
        venue: Some("실외".to_owned()),
        equipment: Some("줄넘기".to_owned()),
        ..common::checkin(common::date(2025, 6, 1), "행복")
    };

    let context = RecommendationEngine::default()
        .prepare(&request("민수", &record, "snow"), &common::sample_catalog())
        .unwrap();

    assert_eq!(context.target_tier(), IntensityTier::Medium);
    assert!((context.arousal() - 3.0).abs() < f64::EPSILON);
    assert_eq!(context.arousal_level, Some(ArousalLevel::High));
    assert_eq!(context.venue.venue, EffectiveVenue::Indoor);
    assert!(context.venue.weather_forced);
    assert_eq!(context.selection, SelectionMode::Exact);
    assert_eq!(context.candidates.len(), 5);
    assert_eq!(context.equipment(), ["줄넘기".to_owned()]);
    assert!(context.has_candidate("수영"));
    assert!(!context.has_candidate("버피"));
    assert!(context.warnings.is_empty());
}

#[test]
fn test_prepare_leaves_arousal_level_empty_without_known_emotions() {
    let record = common::checkin(common::date(2025, 6, 1), "뿌듯함");

    let context = RecommendationEngine::default()
        .prepare(&request("민수", &record, "clear"), &common::sample_catalog())
        .unwrap();

    assert!(!context.intensity.arousal_from_emotions);
    assert!((context.arousal() - 3.0).abs() < f64::EPSILON);
    assert_eq!(context.target_tier(), IntensityTier::Medium);
    assert_eq!(context.arousal_level, None);
}

#[test]
fn test_prepare_carries_purpose_fallback_warning() {
    let record = DailyStateRecord {
        purpose: Some("근력 강화".to_owned()),
        ..common::checkin(common::date(2025, 6, 1), "행복")
    };

    let context = RecommendationEngine::default()
        .prepare(&request("민수", &record, "clear"), &common::sample_catalog())
        .unwrap();

    assert_eq!(context.selection, SelectionMode::PurposeFallback);
    assert_eq!(context.warnings.len(), 1);
}

#[test]
fn test_prepare_tags_no_candidates_with_user() {
    let record = common::checkin(common::date(2025, 6, 1), "행복");

    let err = RecommendationEngine::default()
        .prepare(&request("민수", &record, "clear"), &[])
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::NoCandidates);
    assert_eq!(err.context.user_name.as_deref(), Some("민수"));
}

#[test]
fn test_engine_uses_its_configuration() {
    let config = IntelligenceConfig {
        candidates: CandidateConfig {
            min_exact_matches: 6,
        },
        ..IntelligenceConfig::default()
    };
    let record = common::checkin(common::date(2025, 6, 1), "행복");

    let context = RecommendationEngine::new(config)
        .prepare(&request("민수", &record, "clear"), &common::sample_catalog())
        .unwrap();

    assert_eq!(context.selection, SelectionMode::Widened);
    assert_eq!(context.candidates.len(), 10);
}

#[test]
fn test_batch_results_follow_request_order() {
    let day = common::date(2025, 6, 1);
    let requests: Vec<RecommendationRequest> = (0..24)
        .map(|i| {
            let emotion = if i % 2 == 0 { "행복" } else { "분노" };
            let record = DailyStateRecord {
                stress: Some("높음".to_owned()),
                ..common::checkin(day, emotion)
            };
            request(&format!("user-{i}"), &record, "clear")
        })
        .collect();
    let engine = RecommendationEngine::default();
    let catalog = common::sample_catalog();

    let results = engine.prepare_batch(&requests, &catalog);

    assert_eq!(results.len(), requests.len());
    for (i, result) in results.iter().enumerate() {
        let context = result.as_ref().unwrap();
        assert_eq!(context.profile.name, format!("user-{i}"));
        let single = engine.prepare(&requests[i], &catalog).unwrap();
        assert_eq!(context, &single);
    }
}

#[test]
fn test_batch_reports_failures_in_place() {
    let day = common::date(2025, 6, 1);
    let tired_relief = DailyStateRecord {
        purpose: Some("스트레스 해소".to_owned()),
        ..common::checkin(day, "피로")
    };
    let unknown_purpose = DailyStateRecord {
        purpose: Some("근력 강화".to_owned()),
        ..common::checkin(day, "피로")
    };
    let requests = vec![
        request("a", &tired_relief, "clear"),
        request("b", &unknown_purpose, "clear"),
    ];
    // Only a high-intensity exercise: a low target cannot widen to it
    let catalog = vec![Exercise::new("복싱", IntensityTier::High, &["스트레스 해소"])];

    let results = RecommendationEngine::default().prepare_batch(&requests, &catalog);

    let err = results[0].as_ref().unwrap_err();
    assert_eq!(err.code, ErrorCode::NoCandidates);
    assert_eq!(err.context.user_name.as_deref(), Some("a"));
    let context = results[1].as_ref().unwrap();
    assert_eq!(context.selection, SelectionMode::PurposeFallback);
    assert_eq!(context.candidates.len(), 1);
}
