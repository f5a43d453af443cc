// ABOUTME: Place/weather resolver combining stated venue preference with current weather
// ABOUTME: Bad-weather keywords force indoor, otherwise an exact preference is honored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use moodfit_core::models::{EffectiveVenue, VenuePreference};
use serde::{Deserialize, Serialize};

use crate::config::intelligence::VENUE_PLACEHOLDER;
use crate::config::VenueConfig;

/// Resolved venue with the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueResolution {
    /// Effective venue
    pub venue: EffectiveVenue,
    /// Explanation
    pub message: String,
    /// Whether weather overrode the preference
    pub weather_forced: bool,
}

/// Resolves the effective venue
#[derive(Debug, Clone, Copy)]
pub struct VenueResolver<'a> {
    config: &'a VenueConfig,
}

impl<'a> VenueResolver<'a> {
    /// Create a resolver over the venue configuration
    #[must_use]
    pub const fn new(config: &'a VenueConfig) -> Self {
        Self { config }
    }

    /// Whether the condition contains any bad-weather keyword, case-insensitively
    #[must_use]
    pub fn is_bad_weather(&self, condition: &str) -> bool {
        let condition = condition.to_lowercase();
        self.config
            .bad_weather
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .any(|k| !k.is_empty() && condition.contains(&k))
    }

    /// Resolve from a raw preference label
    #[must_use]
    pub fn resolve(&self, stated: &str, condition: &str) -> VenueResolution {
        self.resolve_preference(VenuePreference::parse(stated), condition)
    }

    /// Resolve from an already-parsed preference
    #[must_use]
    pub fn resolve_preference(
        &self,
        preference: VenuePreference,
        condition: &str,
    ) -> VenueResolution {
        let messages = &self.config.messages;
        if self.is_bad_weather(condition) {
            return VenueResolution {
                venue: EffectiveVenue::Indoor,
                message: messages.bad_weather.clone(),
                weather_forced: preference != VenuePreference::Indoor,
            };
        }

        let venue = match preference {
            VenuePreference::Indoor => EffectiveVenue::Indoor,
            VenuePreference::Outdoor => EffectiveVenue::Outdoor,
            VenuePreference::NoPreference => {
                return VenueResolution {
                    venue: EffectiveVenue::Either,
                    message: messages.either.clone(),
                    weather_forced: false,
                };
            }
        };

        VenueResolution {
            venue,
            message: messages.preferred.replace(VENUE_PLACEHOLDER, venue.label()),
            weather_forced: false,
        }
    }
}
