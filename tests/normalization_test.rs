// ABOUTME: Tests for daily state and profile normalization against the defaults table
// ABOUTME: Missing, malformed and out-of-range fields resolve to documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use moodfit_core::errors::ErrorCode;
use moodfit_core::models::{DailyStateRecord, Level, Purpose, UserProfileRecord, VenuePreference};
use moodfit_intelligence::{normalize, normalize_profile};

#[test]
fn test_empty_record_gets_every_default() {
    let daily = normalize(&DailyStateRecord::new(common::date(2025, 6, 1)));

    assert!(daily.emotions.is_empty());
    assert!((daily.sleep_hours - 7.0).abs() < f64::EPSILON);
    assert!((daily.available_minutes - 30.0).abs() < f64::EPSILON);
    assert_eq!(daily.stress, Level::Medium);
    assert_eq!(daily.purpose, Purpose::Fitness);
    assert_eq!(daily.venue, VenuePreference::NoPreference);
    assert!(daily.equipment.is_empty());
}

#[test]
fn test_emotions_are_split_trimmed_and_ordered() {
    let daily = normalize(&common::checkin(common::date(2025, 6, 1), " 불안 ,, 설렘,행복 "));

    assert_eq!(daily.emotions, vec!["불안", "설렘", "행복"]);
    assert_eq!(daily.primary_emotion(), Some("불안"));
}

#[test]
fn test_zero_values_are_kept() {
    let daily = normalize(&DailyStateRecord {
        sleep_hours: Some(0.0),
        available_minutes: Some(0.0),
        ..DailyStateRecord::new(common::date(2025, 6, 1))
    });

    assert!(daily.sleep_hours.abs() < f64::EPSILON);
    assert!(daily.available_minutes.abs() < f64::EPSILON);
}

#[test]
fn test_out_of_range_numbers_fall_back_to_defaults() {
    let daily = normalize(&DailyStateRecord {
        sleep_hours: Some(30.0),
        available_minutes: Some(-10.0),
        ..DailyStateRecord::new(common::date(2025, 6, 1))
    });
    assert!((daily.sleep_hours - 7.0).abs() < f64::EPSILON);
    assert!((daily.available_minutes - 30.0).abs() < f64::EPSILON);

    let daily = normalize(&DailyStateRecord {
        sleep_hours: Some(f64::NAN),
        available_minutes: Some(f64::INFINITY),
        ..DailyStateRecord::new(common::date(2025, 6, 1))
    });
    assert!((daily.sleep_hours - 7.0).abs() < f64::EPSILON);
    assert!((daily.available_minutes - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_labels_are_parsed() {
    let daily = normalize(&DailyStateRecord {
        stress: Some("high".to_owned()),
        purpose: Some("스트레스 해소".to_owned()),
        venue: Some("실내".to_owned()),
        equipment: Some("덤벨, 요가매트".to_owned()),
        ..DailyStateRecord::new(common::date(2025, 6, 1))
    });

    assert_eq!(daily.stress, Level::High);
    assert_eq!(daily.purpose, Purpose::StressRelief);
    assert_eq!(daily.venue, VenuePreference::Indoor);
    assert_eq!(daily.equipment, vec!["덤벨", "요가매트"]);
}

#[test]
fn test_unknown_labels_degrade_gracefully() {
    let daily = normalize(&DailyStateRecord {
        stress: Some("극심".to_owned()),
        purpose: Some("근력 강화".to_owned()),
        venue: Some("공원".to_owned()),
        equipment: Some("없음".to_owned()),
        ..DailyStateRecord::new(common::date(2025, 6, 1))
    });

    assert_eq!(daily.stress, Level::Medium);
    assert_eq!(daily.purpose, Purpose::Other("근력 강화".to_owned()));
    assert_eq!(daily.purpose.label(), "근력 강화");
    assert_eq!(daily.venue, VenuePreference::NoPreference);
    assert!(daily.equipment.is_empty());
}

#[test]
fn test_profile_defaults() {
    let profile = normalize_profile(&UserProfileRecord {
        name: " 지수 ".to_owned(),
        ..UserProfileRecord::default()
    })
    .unwrap();

    assert_eq!(profile.name, "지수");
    assert_eq!(profile.activity_level, Level::Medium);
    assert!(!profile.has_injury);
    assert!(profile.injury_details.is_empty());
}

#[test]
fn test_injury_details_imply_injury() {
    let profile = normalize_profile(&UserProfileRecord {
        name: "민수".to_owned(),
        injury_details: Some("무릎, 발목".to_owned()),
        ..UserProfileRecord::default()
    })
    .unwrap();

    assert!(profile.has_injury);
    assert_eq!(profile.injury_details, vec!["무릎", "발목"]);
}

#[test]
fn test_explicit_no_injury_clears_details() {
    let profile = normalize_profile(&UserProfileRecord {
        name: "민수".to_owned(),
        injury_status: Some("없음".to_owned()),
        injury_details: Some("무릎".to_owned()),
        ..UserProfileRecord::default()
    })
    .unwrap();

    assert!(!profile.has_injury);
    assert!(profile.injury_details.is_empty());
}

#[test]
fn test_non_positive_measurements_are_dropped() {
    let profile = normalize_profile(&UserProfileRecord {
        name: "민수".to_owned(),
        height_cm: Some(0.0),
        weight_kg: Some(72.5),
        activity_level: Some("높음".to_owned()),
        ..UserProfileRecord::default()
    })
    .unwrap();

    assert_eq!(profile.height_cm, None);
    assert_eq!(profile.weight_kg, Some(72.5));
    assert_eq!(profile.activity_level, Level::High);
}

#[test]
fn test_blank_name_is_rejected() {
    let err = normalize_profile(&UserProfileRecord::default()).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}
