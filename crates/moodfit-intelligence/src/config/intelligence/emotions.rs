// ABOUTME: Emotion vocabulary configuration for arousal scoring and rule sets
// ABOUTME: Holds the label-to-arousal table and the positive/negative emotion sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Emotion vocabulary
///
/// All three collections must use the same label strings. Negative labels
/// need not appear in the arousal table (e.g. 초조, 우울 only affect rules).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionConfig {
    /// Arousal score per emotion label, 1 to 5
    pub arousal_scores: BTreeMap<String, u8>,
    /// Labels that allow a medium to high upgrade
    pub positive: BTreeSet<String>,
    /// Labels that cap a high target at medium
    pub negative: BTreeSet<String>,
}

const DEFAULT_SCORES: [(&str, u8); 20] = [
    ("행복", 3),
    ("기쁨", 4),
    ("설렘", 4),
    ("자신감", 3),
    ("활력", 5),
    ("만족", 2),
    ("슬픔", 1),
    ("분노", 5),
    ("불안", 4),
    ("두려움", 4),
    ("피로", 1),
    ("스트레스", 4),
    ("무기력", 1),
    ("지루함", 2),
    ("외로움", 2),
    ("차분함", 2),
    ("집중", 3),
    ("긴장", 4),
    ("놀람", 4),
    ("혼란", 3),
];

const DEFAULT_POSITIVE: [&str; 6] = ["행복", "기쁨", "설렘", "자신감", "활력", "만족"];

const DEFAULT_NEGATIVE: [&str; 7] = ["슬픔", "분노", "불안", "초조", "우울", "긴장", "스트레스"];

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            arousal_scores: DEFAULT_SCORES
                .iter()
                .map(|(label, score)| ((*label).to_owned(), *score))
                .collect(),
            positive: DEFAULT_POSITIVE.iter().map(|s| (*s).to_owned()).collect(),
            negative: DEFAULT_NEGATIVE.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}
