// ABOUTME: Exercise catalog entry with normalized tier and tag sets
// ABOUTME: Also defines ranked recommendations and post-workout evaluations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::intensity::IntensityTier;
use crate::constants::evaluation;
use crate::errors::{AppError, AppResult};

/// One exercise from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name, unique within a catalog
    pub name: String,
    /// Normalized intensity tier
    pub tier: IntensityTier,
    /// Purpose tags
    pub purposes: Vec<String>,
    /// Emotion tags
    pub emotions: Vec<String>,
    /// Energy cost per unit body weight, never negative
    pub energy_coefficient: f64,
}

impl Exercise {
    /// Build an exercise from already-split tags
    pub fn new(name: impl Into<String>, tier: IntensityTier, purposes: &[&str]) -> Self {
        Self {
            name: name.into(),
            tier,
            purposes: purposes.iter().map(|p| (*p).to_owned()).collect(),
            emotions: Vec::new(),
            energy_coefficient: 0.0,
        }
    }

    /// Attach emotion tags
    #[must_use]
    pub fn with_emotions(mut self, emotions: &[&str]) -> Self {
        self.emotions = emotions.iter().map(|e| (*e).to_owned()).collect();
        self
    }

    /// Attach an energy coefficient, negative and non-finite values become 0
    #[must_use]
    pub fn with_energy(mut self, coefficient: f64) -> Self {
        self.energy_coefficient = if coefficient.is_finite() && coefficient > 0.0 {
            coefficient
        } else {
            0.0
        };
        self
    }

    /// Whether the exercise is tagged with the purpose
    #[must_use]
    pub fn serves(&self, purpose: &str) -> bool {
        self.purposes.iter().any(|p| p == purpose)
    }
}

/// One ranked pick returned by a ranking collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedExercise {
    /// 1-based rank
    pub rank: usize,
    /// Exercise name, always a member of the candidate set
    pub name: String,
    /// Free-text justification
    pub reason: String,
}

/// User feedback on one day's recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Per-exercise suitability ratings, 1 to 5
    pub ratings: Vec<(String, u8)>,
    /// Fixed survey answers, 1 to 5 each
    pub survey: [u8; evaluation::SURVEY_QUESTIONS],
    /// Most satisfying part, free text
    pub liked: String,
    /// Suggested improvement, free text
    pub improvement: String,
}

impl Evaluation {
    /// Check every rating and survey answer is within the allowed scale
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending item.
    pub fn validate(&self) -> AppResult<()> {
        let range = evaluation::MIN_SCORE..=evaluation::MAX_SCORE;
        if let Some((name, score)) = self.ratings.iter().find(|(_, s)| !range.contains(s)) {
            return Err(AppError::out_of_range(format!(
                "rating for '{name}' must be between {} and {}, got {score}",
                evaluation::MIN_SCORE,
                evaluation::MAX_SCORE
            ))
            .with_resource_id(name.clone()));
        }
        if let Some((index, score)) = self
            .survey
            .iter()
            .enumerate()
            .find(|(_, s)| !range.contains(s))
        {
            return Err(AppError::out_of_range(format!(
                "survey question {} must be between {} and {}, got {score}",
                index + 1,
                evaluation::MIN_SCORE,
                evaluation::MAX_SCORE
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn evaluation() -> Evaluation {
        Evaluation {
            ratings: vec![("요가".to_owned(), 4), ("스쿼트".to_owned(), 5)],
            survey: [3; evaluation::SURVEY_QUESTIONS],
            liked: "이유가 명확했다".to_owned(),
            improvement: String::new(),
        }
    }

    #[test]
    fn test_valid_evaluation_passes() {
        assert!(evaluation().validate().is_ok());
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut eval = evaluation();
        eval.ratings[1].1 = 6;
        let err = eval.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.resource_id.as_deref(), Some("스쿼트"));
    }

    #[test]
    fn test_survey_zero_rejected() {
        let mut eval = evaluation();
        eval.survey[7] = 0;
        let err = eval.validate().unwrap_err();
        assert!(err.message.contains("question 8"));
    }

    #[test]
    fn test_energy_clamped() {
        let ex = Exercise::new("걷기", IntensityTier::Low, &["체중 감량"]).with_energy(-2.0);
        assert!(ex.energy_coefficient.abs() < f64::EPSILON);
        assert!(ex.serves("체중 감량"));
        assert!(!ex.serves("체형 교정"));
    }
}
