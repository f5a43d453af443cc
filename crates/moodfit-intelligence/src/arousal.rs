// ABOUTME: Emotion arousal mapper and aggregator over an injected emotion vocabulary
// ABOUTME: Unknown labels are skipped, an empty or all-unknown set yields no data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use moodfit_core::models::ArousalLevel;

use crate::config::EmotionConfig;

/// Immutable emotion vocabulary: arousal scores plus positive/negative sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionCatalog {
    scores: BTreeMap<String, u8>,
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

impl Default for EmotionCatalog {
    fn default() -> Self {
        Self::from_config(&EmotionConfig::default())
    }
}

impl EmotionCatalog {
    /// Build from the emotion section of the intelligence configuration
    #[must_use]
    pub fn from_config(config: &EmotionConfig) -> Self {
        Self {
            scores: config.arousal_scores.clone(),
            positive: config.positive.clone(),
            negative: config.negative.clone(),
        }
    }

    /// Build from explicit label/score pairs with no positive or negative sets
    pub fn from_scores<'a>(scores: impl IntoIterator<Item = (&'a str, u8)>) -> Self {
        Self {
            scores: scores
                .into_iter()
                .map(|(label, score)| (label.to_owned(), score))
                .collect(),
            positive: BTreeSet::new(),
            negative: BTreeSet::new(),
        }
    }

    /// Arousal score of one emotion, `None` when the label is unknown
    #[must_use]
    pub fn score(&self, emotion: &str) -> Option<u8> {
        self.scores.get(emotion.trim()).copied()
    }

    /// Mean score of the recognized emotions
    ///
    /// Returns `None` when nothing was recognized; callers choose the fallback.
    #[must_use]
    pub fn aggregate<S: AsRef<str>>(&self, emotions: &[S]) -> Option<f64> {
        let (sum, count) = emotions
            .iter()
            .filter_map(|e| self.score(e.as_ref()))
            .fold((0_u32, 0_u32), |(sum, count), score| {
                (sum + u32::from(score), count + 1)
            });
        (count > 0).then(|| f64::from(sum) / f64::from(count))
    }

    /// Mean score and its categorical level
    #[must_use]
    pub fn aggregate_with_level<S: AsRef<str>>(
        &self,
        emotions: &[S],
    ) -> Option<(f64, ArousalLevel)> {
        let mean = self.aggregate(emotions)?;
        ArousalLevel::from_score(mean).map(|level| (mean, level))
    }

    /// Whether the label is in the positive set
    #[must_use]
    pub fn is_positive(&self, emotion: &str) -> bool {
        self.positive.contains(emotion.trim())
    }

    /// Whether the label is in the negative set
    #[must_use]
    pub fn is_negative(&self, emotion: &str) -> bool {
        self.negative.contains(emotion.trim())
    }

    /// Every label with a known arousal score
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }
}
