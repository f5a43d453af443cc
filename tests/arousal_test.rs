// ABOUTME: Tests for the emotion arousal mapper and aggregator
// ABOUTME: Verifies mean aggregation, unknown-label handling and arousal level boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use moodfit_core::models::ArousalLevel;
use moodfit_intelligence::EmotionCatalog;

#[test]
fn test_default_vocabulary_scores() {
    let catalog = EmotionCatalog::default();

    assert_eq!(catalog.score("활력"), Some(5));
    assert_eq!(catalog.score("슬픔"), Some(1));
    assert_eq!(catalog.score(" 집중 "), Some(3));
    assert_eq!(catalog.score("뿌듯함"), None);
    assert_eq!(catalog.labels().count(), 20);
}

#[test]
fn test_aggregate_is_mean_of_recognized_scores() {
    let catalog = EmotionCatalog::default();

    let mean = catalog.aggregate(&["행복", "기쁨", "활력"]).unwrap();
    assert!((mean - 4.0).abs() < f64::EPSILON);

    let mean = catalog.aggregate(&["슬픔", "분노"]).unwrap();
    assert!((mean - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_aggregate_ignores_unknown_labels() {
    let catalog = EmotionCatalog::default();

    let mean = catalog.aggregate(&["피로", "몰라", "무기력"]).unwrap();
    assert!((mean - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_aggregate_without_recognized_labels_is_none() {
    let catalog = EmotionCatalog::default();

    assert_eq!(catalog.aggregate::<&str>(&[]), None);
    assert_eq!(catalog.aggregate(&["초조", "우울"]), None);
}

#[test]
fn test_custom_vocabulary_is_injected() {
    let catalog = EmotionCatalog::from_scores([("calm", 1), ("hyped", 5)]);

    let mean = catalog.aggregate(&["calm", "hyped", "행복"]).unwrap();
    assert!((mean - 3.0).abs() < f64::EPSILON);
    assert!(!catalog.is_negative("분노"));
    assert!(!catalog.is_positive("행복"));
}

#[test]
fn test_default_emotion_sets() {
    let catalog = EmotionCatalog::default();

    assert!(catalog.is_positive("설렘"));
    assert!(catalog.is_negative("긴장"));
    assert!(catalog.is_negative("우울"));
    assert!(!catalog.is_positive("집중"));
    assert!(!catalog.is_negative("피로"));
}

#[test]
fn test_arousal_level_boundaries() {
    assert_eq!(ArousalLevel::from_score(0.5), Some(ArousalLevel::VeryLow));
    assert_eq!(ArousalLevel::from_score(1.0), Some(ArousalLevel::Low));
    assert_eq!(ArousalLevel::from_score(1.999), Some(ArousalLevel::Low));
    assert_eq!(ArousalLevel::from_score(2.0), Some(ArousalLevel::Medium));
    assert_eq!(ArousalLevel::from_score(3.0), Some(ArousalLevel::High));
    assert_eq!(ArousalLevel::from_score(3.999), Some(ArousalLevel::High));
    assert_eq!(ArousalLevel::from_score(4.0), Some(ArousalLevel::VeryHigh));
    assert_eq!(ArousalLevel::from_score(f64::NAN), None);
}

#[test]
fn test_aggregate_with_level() {
    let catalog = EmotionCatalog::default();

    let (mean, level) = catalog.aggregate_with_level(&["분노", "활력"]).unwrap();
    assert!((mean - 5.0).abs() < f64::EPSILON);
    assert_eq!(level, ArousalLevel::VeryHigh);
    assert_eq!(level.label(), "매우 높음");
}
