// ABOUTME: Core types and constants for the MoodFit exercise recommendation platform
// ABOUTME: Foundation crate with error handling, domain models and the defaults table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # MoodFit Core
//!
//! Foundation crate providing shared types and constants for MoodFit. It has
//! no I/O of its own and changes rarely, so the intelligence crate and the
//! service crate can build on it independently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, `AppResult`
//! - **constants**: Documented defaults, vocabulary labels, collaborator defaults
//! - **models**: Tiers, profiles, daily states, exercises, evaluations

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
