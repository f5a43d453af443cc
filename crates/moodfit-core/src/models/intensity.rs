// ABOUTME: Ordered exercise intensity tiers and categorical arousal levels
// ABOUTME: Tier predecessor/successor operations saturate at the ends of the ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::labels;

/// Exercise intensity classification
///
/// The derived ordering (`Low < Medium < High`) drives candidate widening and
/// the one-tier-down/up adjustments of intensity inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityTier {
    /// 저강도
    Low,
    /// 중강도
    Medium,
    /// 고강도
    High,
}

impl IntensityTier {
    /// All tiers in ascending order
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Domain-language label as stored in the catalog
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => labels::TIER_LOW,
            Self::Medium => labels::TIER_MEDIUM,
            Self::High => labels::TIER_HIGH,
        }
    }

    /// English identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// One tier lower, staying at `Low`
    #[must_use]
    pub const fn step_down(self) -> Self {
        match self {
            Self::Low | Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }

    /// One tier higher, staying at `High`
    #[must_use]
    pub const fn step_up(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    /// True when `other` is this tier or directly adjacent to it
    #[must_use]
    pub fn is_adjacent_or_equal(self, other: Self) -> bool {
        other == self || other == self.step_down() || other == self.step_up()
    }

    /// Parse a tier from its Korean label or English name
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            labels::TIER_LOW | "low" => Some(Self::Low),
            labels::TIER_MEDIUM | "medium" => Some(Self::Medium),
            labels::TIER_HIGH | "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for IntensityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorical reading of an average arousal score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArousalLevel {
    /// [0, 1)
    VeryLow,
    /// [1, 2)
    Low,
    /// [2, 3)
    Medium,
    /// [3, 4)
    High,
    /// [4, inf)
    VeryHigh,
}

impl ArousalLevel {
    /// Classify a mean arousal score with half-open bounds
    ///
    /// Returns `None` for NaN so that "no data" is never mistaken for a level.
    #[must_use]
    pub fn from_score(score: f64) -> Option<Self> {
        if score.is_nan() {
            return None;
        }
        let level = if score < 1.0 {
            Self::VeryLow
        } else if score < 2.0 {
            Self::Low
        } else if score < 3.0 {
            Self::Medium
        } else if score < 4.0 {
            Self::High
        } else {
            Self::VeryHigh
        };
        Some(level)
    }

    /// Domain-language label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "매우 낮음",
            Self::Low => "낮음",
            Self::Medium => "중간",
            Self::High => "높음",
            Self::VeryHigh => "매우 높음",
        }
    }
}

impl fmt::Display for ArousalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_operations_saturate() {
        assert_eq!(IntensityTier::Low.step_down(), IntensityTier::Low);
        assert_eq!(IntensityTier::High.step_up(), IntensityTier::High);
        assert_eq!(IntensityTier::Medium.step_down(), IntensityTier::Low);
        assert_eq!(IntensityTier::Medium.step_up(), IntensityTier::High);
    }

    #[test]
    fn test_adjacency() {
        assert!(IntensityTier::Low.is_adjacent_or_equal(IntensityTier::Medium));
        assert!(!IntensityTier::Low.is_adjacent_or_equal(IntensityTier::High));
        assert!(IntensityTier::Medium.is_adjacent_or_equal(IntensityTier::High));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(IntensityTier::parse("고강도"), Some(IntensityTier::High));
        assert_eq!(IntensityTier::parse(" Medium "), Some(IntensityTier::Medium));
        assert_eq!(IntensityTier::parse("초고강도"), None);
    }

    #[test]
    fn test_arousal_level_boundaries() {
        assert_eq!(ArousalLevel::from_score(-1.0), Some(ArousalLevel::VeryLow));
        assert_eq!(ArousalLevel::from_score(1.999), Some(ArousalLevel::Low));
        assert_eq!(ArousalLevel::from_score(2.0), Some(ArousalLevel::Medium));
        assert_eq!(ArousalLevel::from_score(3.0), Some(ArousalLevel::High));
        assert_eq!(ArousalLevel::from_score(3.999), Some(ArousalLevel::High));
        assert_eq!(ArousalLevel::from_score(4.0), Some(ArousalLevel::VeryHigh));
        assert_eq!(ArousalLevel::from_score(f64::NAN), None);
    }
}
