// ABOUTME: Tests for purpose and tier candidate filtering with widen-on-scarcity
// ABOUTME: Covers exact selection, widening, purpose fallback and the no-candidates outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use moodfit_core::errors::ErrorCode;
use moodfit_core::models::{Exercise, IntensityTier};
use moodfit_intelligence::config::CandidateConfig;
use moodfit_intelligence::{CandidateFilter, SelectionMode};

fn names(set: &moodfit_intelligence::CandidateSet<'_>) -> Vec<String> {
    set.exercises.iter().map(|e| e.name.clone()).collect()
}

fn scarce_medium_catalog() -> Vec<Exercise> {
    let mut catalog: Vec<Exercise> = (0..3)
        .map(|i| Exercise::new(format!("medium-{i}"), IntensityTier::Medium, &["P"]))
        .collect();
    catalog.extend(
        (0..10).map(|i| Exercise::new(format!("high-{i}"), IntensityTier::High, &["P"])),
    );
    catalog
}

#[test]
fn test_scarce_exact_matches_widen_to_neighbours() {
    let config = CandidateConfig::default();
    let catalog = scarce_medium_catalog();

    let set = CandidateFilter::new(&config).filter(&catalog, "P", IntensityTier::Medium);

    assert_eq!(set.mode, SelectionMode::Widened);
    assert_eq!(set.len(), 13);
}

#[test]
fn test_enough_exact_matches_are_not_widened() {
    let config = CandidateConfig::default();
    let catalog = common::sample_catalog();

    let set = CandidateFilter::new(&config).filter(&catalog, "체력 향상", IntensityTier::Medium);

    assert_eq!(set.mode, SelectionMode::Exact);
    assert_eq!(names(&set), vec!["자전거", "조깅", "수영", "계단 오르기", "줄넘기"]);
}

#[test]
fn test_widening_from_low_excludes_high() {
    let config = CandidateConfig::default();
    let catalog = common::sample_catalog();

    let set = CandidateFilter::new(&config).filter(&catalog, "체력 향상", IntensityTier::Low);

    assert_eq!(set.mode, SelectionMode::Widened);
    assert_eq!(set.len(), 8);
    assert!(set.exercises.iter().all(|e| e.tier != IntensityTier::High));
    // Catalog order is preserved
    assert_eq!(names(&set)[0], "빠르게 걷기");
    assert_eq!(names(&set)[3], "자전거");
}

#[test]
fn test_min_exact_matches_is_configurable() {
    let config = CandidateConfig {
        min_exact_matches: 2,
    };
    let catalog = common::sample_catalog();

    let set = CandidateFilter::new(&config).filter(&catalog, "체력 향상", IntensityTier::High);

    assert_eq!(set.mode, SelectionMode::Exact);
    assert_eq!(names(&set), vec!["버피", "인터벌 러닝"]);
}

#[test]
fn test_unknown_purpose_falls_back_to_full_catalog_with_warning() {
    let config = CandidateConfig::default();
    let catalog = common::sample_catalog();
    let mut warnings = Vec::new();

    let set = CandidateFilter::new(&config)
        .select(&catalog, "근력 강화", IntensityTier::Medium, &mut warnings)
        .unwrap();

    assert_eq!(set.mode, SelectionMode::PurposeFallback);
    assert_eq!(set.len(), catalog.len());
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("근력 강화"));
}

#[test]
fn test_empty_after_widening_is_no_candidates() {
    let config = CandidateConfig::default();
    let catalog = vec![Exercise::new("스프린트", IntensityTier::High, &["P"])];
    let mut warnings = Vec::new();

    let err = CandidateFilter::new(&config)
        .select(&catalog, "P", IntensityTier::Low, &mut warnings)
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::NoCandidates);
    assert!(warnings.is_empty());
}

#[test]
fn test_empty_catalog_is_no_candidates() {
    let config = CandidateConfig::default();
    let mut warnings = Vec::new();

    let err = CandidateFilter::new(&config)
        .select(&[], "체력 향상", IntensityTier::Medium, &mut warnings)
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::NoCandidates);
}
