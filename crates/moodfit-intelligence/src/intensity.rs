// ABOUTME: Intensity inferencer turning arousal and daily/profile state into a target tier
// ABOUTME: Rules run in a fixed order, each reading the running target left by the previous one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intensity Inference
//!
//! 1. Base tier from arousal (high at or above 4.0, medium at or above 2.5).
//! 2. Negative primary emotion or high stress caps high at medium.
//! 3. Sleep deficit or injury steps the running target down one tier.
//! 4. Active users with a long session and no injury step low up to medium,
//!    or medium up to high when the primary emotion is positive.
//! 5. Stress-relief purpose under high stress caps high at medium.
//!
//! Only the first reported emotion is consulted by rules 2 and 4.

use moodfit_core::models::{DailyState, IntensityTier, Level, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arousal::EmotionCatalog;
use crate::config::InferenceConfig;

/// Rule that moved the target tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentRule {
    /// Negative primary emotion or high stress
    NegativeMoodOrHighStress,
    /// Short sleep or injury
    SleepDeficitOrInjury,
    /// High baseline activity with a long session available
    ActiveLongSession,
    /// Stress-relief purpose while highly stressed
    StressReliefCap,
}

/// One applied tier change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Rule that fired
    pub rule: AdjustmentRule,
    /// Tier before the rule
    pub from: IntensityTier,
    /// Tier after the rule
    pub to: IntensityTier,
}

/// Inference result with the trail of rules that changed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityDecision {
    /// Final target tier
    pub tier: IntensityTier,
    /// Arousal used for the base tier
    pub arousal: f64,
    /// False when no emotion was recognized and the default arousal was used
    pub arousal_from_emotions: bool,
    /// Tier chosen from arousal alone
    pub base: IntensityTier,
    /// Rules that changed the tier, in application order
    pub adjustments: Vec<Adjustment>,
}

/// Stateless inferencer over borrowed configuration and vocabulary
#[derive(Debug, Clone, Copy)]
pub struct IntensityInferencer<'a> {
    config: &'a InferenceConfig,
    emotions: &'a EmotionCatalog,
}

impl<'a> IntensityInferencer<'a> {
    /// Create an inferencer
    #[must_use]
    pub const fn new(config: &'a InferenceConfig, emotions: &'a EmotionCatalog) -> Self {
        Self { config, emotions }
    }

    /// Base tier for an arousal value
    #[must_use]
    pub fn base_tier(&self, arousal: f64) -> IntensityTier {
        if arousal >= self.config.high_arousal_threshold {
            IntensityTier::High
        } else if arousal >= self.config.medium_arousal_threshold {
            IntensityTier::Medium
        } else {
            IntensityTier::Low
        }
    }

    /// Target tier and arousal for a normalized daily state and profile
    #[must_use]
    pub fn infer(&self, daily: &DailyState, profile: &UserProfile) -> (IntensityTier, f64) {
        let decision = self.explain(daily, profile);
        (decision.tier, decision.arousal)
    }

    /// Full decision including which rules fired
    #[must_use]
    pub fn explain(&self, daily: &DailyState, profile: &UserProfile) -> IntensityDecision {
        let aggregated = self.emotions.aggregate(&daily.emotions);
        let arousal = aggregated.unwrap_or(self.config.default_arousal);
        let base = self.base_tier(arousal);

        let primary = daily.primary_emotion().unwrap_or_default();
        let high_stress = daily.stress == Level::High;

        let mut target = base;
        let mut adjustments = Vec::new();
        let mut apply = |rule: AdjustmentRule, target: &mut IntensityTier, next: IntensityTier| {
            if next != *target {
                adjustments.push(Adjustment {
                    rule,
                    from: *target,
                    to: next,
                });
                *target = next;
            }
        };

        if (self.emotions.is_negative(primary) || high_stress) && target == IntensityTier::High {
            apply(
                AdjustmentRule::NegativeMoodOrHighStress,
                &mut target,
                IntensityTier::Medium,
            );
        }

        if daily.sleep_hours < self.config.sleep_deficit_hours || profile.has_injury {
            let next = target.step_down();
            apply(AdjustmentRule::SleepDeficitOrInjury, &mut target, next);
        }

        if profile.activity_level == Level::High
            && daily.available_minutes >= self.config.long_session_minutes
            && !profile.has_injury
        {
            match target {
                IntensityTier::Low => {
                    apply(
                        AdjustmentRule::ActiveLongSession,
                        &mut target,
                        IntensityTier::Medium,
                    );
                }
                IntensityTier::Medium if self.emotions.is_positive(primary) => {
                    apply(
                        AdjustmentRule::ActiveLongSession,
                        &mut target,
                        IntensityTier::High,
                    );
                }
                _ => {}
            }
        }

        if daily.purpose.is_stress_relief() && target == IntensityTier::High && high_stress {
            apply(
                AdjustmentRule::StressReliefCap,
                &mut target,
                IntensityTier::Medium,
            );
        }

        debug!(
            arousal,
            base = base.as_str(),
            tier = target.as_str(),
            adjustments = adjustments.len(),
            "Inferred target intensity"
        );

        IntensityDecision {
            tier: target,
            arousal,
            arousal_from_emotions: aggregated.is_some(),
            base,
            adjustments,
        }
    }
}
