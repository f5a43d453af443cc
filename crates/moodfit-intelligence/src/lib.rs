// ABOUTME: Recommendation intelligence for MoodFit: arousal, intensity, venue and candidates
// ABOUTME: Pure synchronous core with no I/O, shared safely across concurrent requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # MoodFit Intelligence
//!
//! Turns a user's profile, one day's check-in and the current weather into a
//! target intensity tier, an effective venue and a bounded candidate set.
//!
//! ## Modules
//!
//! - **arousal**: emotion vocabulary, arousal scoring and aggregation
//! - **normalization**: the single defaults pass over raw records
//! - **intensity**: ordered rule set producing the target tier
//! - **venue**: weather-aware venue resolution
//! - **candidates**: purpose/tier filter with adjacent-tier widening
//! - **engine**: composition of the above, single and batch
//! - **config**: thresholds and vocabularies with env overrides

/// Emotion arousal mapper and aggregator
pub mod arousal;

/// Candidate filter
pub mod candidates;

/// Intelligence configuration
pub mod config;

/// Recommendation engine
pub mod engine;

/// Intensity inferencer
pub mod intensity;

/// Record normalization
pub mod normalization;

/// Place/weather resolver
pub mod venue;

pub use arousal::EmotionCatalog;
pub use candidates::{CandidateFilter, CandidateSet, SelectionMode};
pub use config::IntelligenceConfig;
pub use engine::{
    RecommendationContext, RecommendationEngine, RecommendationRequest, WeatherSnapshot,
};
pub use intensity::{Adjustment, AdjustmentRule, IntensityDecision, IntensityInferencer};
pub use normalization::{normalize, normalize_profile, split_list};
pub use venue::{VenueResolution, VenueResolver};
