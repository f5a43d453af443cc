// ABOUTME: Main library entry point for the MoodFit recommendation service
// ABOUTME: Wires catalog ingestion, weather, ranking, persistence and the end-to-end service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MoodFit`
//!
//! Emotion, sleep and weather aware exercise recommendations.
//!
//! The decision core lives in `moodfit-intelligence` and is pure. This crate
//! supplies everything around it:
//!
//! - **Catalog**: CSV ingestion with copy-on-load snapshots
//! - **Weather**: `OpenWeatherMap` lookups that degrade to `unknown`
//! - **Ranking**: the collaborator contract, a deterministic ranker and an
//!   LLM prompt ranker
//! - **Playlist**: workout playlist queries
//! - **Database**: `SQLite` storage for profiles, check-ins, recommendations
//!   and evaluations
//! - **Service**: the full pipeline behind the `moodfit` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use moodfit::config::MoodFitConfig;
//! use moodfit::errors::AppResult;
//! use moodfit::service::RecommendationService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = MoodFitConfig::from_env()?;
//!     let service = RecommendationService::from_config(&config).await?;
//!     let today = chrono::Local::now().date_naive();
//!     let outcome = service.recommend("민수", today, None).await?;
//!     println!("{}", outcome.summary.tier);
//!     Ok(())
//! }
//! ```

/// Error types shared with the core crates
pub use moodfit_core::errors;

/// Exercise catalog ingestion and snapshots
pub mod catalog;

/// Environment configuration
pub mod config;

/// `SQLite` persistence
pub mod database;

/// Language model provider interface
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Workout playlist queries
pub mod playlist;

/// Ranking collaborators
pub mod ranking;

/// End-to-end recommendation service
pub mod service;

/// Weather providers
pub mod weather;
