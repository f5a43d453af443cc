// ABOUTME: Candidate filter configuration
// ABOUTME: Minimum exact-tier matches below which the filter widens to adjacent tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Candidate filter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateConfig {
    /// Fewer exact-tier matches than this triggers widening; it is not a cap
    pub min_exact_matches: usize,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            min_exact_matches: 5,
        }
    }
}
