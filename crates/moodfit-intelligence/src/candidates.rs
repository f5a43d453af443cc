// ABOUTME: Candidate filter selecting exercises by purpose and target intensity tier
// ABOUTME: Widens to adjacent tiers when too few exact matches exist, preserving catalog order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use moodfit_core::errors::{AppError, AppResult};
use moodfit_core::models::{Exercise, IntensityTier};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CandidateConfig;

/// How the candidate set was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Purpose and exact tier
    Exact,
    /// Purpose and target tier plus its neighbours
    Widened,
    /// Purpose matched nothing, whole catalog used
    PurposeFallback,
}

/// Candidates borrowed from a catalog, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet<'c> {
    /// Selected exercises
    pub exercises: Vec<&'c Exercise>,
    /// Selection mode
    pub mode: SelectionMode,
}

impl CandidateSet<'_> {
    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// True when nothing was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Purpose/tier candidate filter
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'a> {
    config: &'a CandidateConfig,
}

impl<'a> CandidateFilter<'a> {
    /// Create a filter over the candidate configuration
    #[must_use]
    pub const fn new(config: &'a CandidateConfig) -> Self {
        Self { config }
    }

    /// Purpose then tier filtering with widen-on-scarcity
    ///
    /// The result is empty when no exercise carries the purpose, or when none
    /// of the purpose's exercises is within one tier of the target.
    #[must_use]
    pub fn filter<'c>(
        &self,
        catalog: &'c [Exercise],
        purpose: &str,
        target: IntensityTier,
    ) -> CandidateSet<'c> {
        let by_purpose: Vec<&Exercise> = catalog.iter().filter(|e| e.serves(purpose)).collect();

        let exact: Vec<&Exercise> = by_purpose
            .iter()
            .copied()
            .filter(|e| e.tier == target)
            .collect();

        if exact.len() >= self.config.min_exact_matches {
            return CandidateSet {
                exercises: exact,
                mode: SelectionMode::Exact,
            };
        }

        let widened: Vec<&Exercise> = by_purpose
            .into_iter()
            .filter(|e| target.is_adjacent_or_equal(e.tier))
            .collect();
        debug!(
            purpose,
            target = target.as_str(),
            exact = exact.len(),
            widened = widened.len(),
            "Widened candidate tiers"
        );
        CandidateSet {
            exercises: widened,
            mode: SelectionMode::Widened,
        }
    }

    /// Filter and apply the caller policies for degraded outcomes
    ///
    /// An unmatched purpose substitutes the full catalog and adds a warning.
    ///
    /// # Errors
    ///
    /// Returns `NoCandidates` when the purpose exists but nothing survives
    /// widening, or when the catalog itself is empty.
    pub fn select<'c>(
        &self,
        catalog: &'c [Exercise],
        purpose: &str,
        target: IntensityTier,
        warnings: &mut Vec<String>,
    ) -> AppResult<CandidateSet<'c>> {
        if !catalog.iter().any(|e| e.serves(purpose)) {
            if catalog.is_empty() {
                return Err(AppError::no_candidates(purpose, target));
            }
            warn!(purpose, "No exercise tagged with purpose, using full catalog");
            warnings.push(format!(
                "'{purpose}' 목적에 맞는 운동이 없어 전체 운동 목록에서 추천합니다."
            ));
            return Ok(CandidateSet {
                exercises: catalog.iter().collect(),
                mode: SelectionMode::PurposeFallback,
            });
        }

        let set = self.filter(catalog, purpose, target);
        if set.is_empty() {
            warn!(
                purpose,
                target = target.as_str(),
                "No candidates left after widening"
            );
            return Err(AppError::no_candidates(purpose, target));
        }
        Ok(set)
    }
}
