// ABOUTME: Common benchmark utilities and fixtures for recommendation engine benchmarks
// ABOUTME: Provides deterministic catalog and request generators for Criterion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
