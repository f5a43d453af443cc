// ABOUTME: Core data models for the MoodFit recommendation platform
// ABOUTME: Re-exports tiers, profiles, daily states, exercises and evaluations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Shared data structures passed between the pure recommendation core and
//! its collaborators (catalog loader, persistence, ranking).
//!
//! - `IntensityTier` / `ArousalLevel`: ordered classifications
//! - `UserProfile` / `UserProfileRecord`: registration data
//! - `DailyState` / `DailyStateRecord`: one day's check-in
//! - `Exercise`, `RankedExercise`, `Evaluation`: catalog and feedback

mod daily_state;
mod exercise;
mod intensity;
mod profile;

pub use daily_state::{DailyState, DailyStateRecord, EffectiveVenue, Purpose, VenuePreference};
pub use exercise::{Evaluation, Exercise, RankedExercise};
pub use intensity::{ArousalLevel, IntensityTier};
pub use profile::{
    injury_label, parse_injury_status, ActivityLevel, Level, StressLevel, UserProfile,
    UserProfileRecord,
};
