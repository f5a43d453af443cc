// ABOUTME: Tests for effective venue resolution from stated preference and weather
// ABOUTME: Bad weather forces indoor, otherwise the preference or "either" applies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use moodfit_core::models::{EffectiveVenue, VenuePreference};
use moodfit_intelligence::config::{BadWeatherConfig, VenueConfig};
use moodfit_intelligence::VenueResolver;

#[test]
fn test_light_rain_forces_indoor_over_outdoor_preference() {
    let config = VenueConfig::default();
    let resolution = VenueResolver::new(&config).resolve("실외", "light rain");

    assert_eq!(resolution.venue, EffectiveVenue::Indoor);
    assert!(resolution.weather_forced);
    assert_eq!(resolution.message, config.messages.bad_weather);
}

#[test]
fn test_bad_weather_matching_is_case_insensitive() {
    let config = VenueConfig::default();
    let resolver = VenueResolver::new(&config);

    assert!(resolver.is_bad_weather("Thunderstorm"));
    assert!(resolver.is_bad_weather("SNOW"));
    assert!(resolver.is_bad_weather("drizzle"));
    assert!(!resolver.is_bad_weather("clear"));
    assert!(!resolver.is_bad_weather("unknown"));
}

#[test]
fn test_indoor_preference_in_bad_weather_is_not_forced() {
    let config = VenueConfig::default();
    let resolution = VenueResolver::new(&config).resolve("실내", "rain");

    assert_eq!(resolution.venue, EffectiveVenue::Indoor);
    assert!(!resolution.weather_forced);
}

#[test]
fn test_clear_weather_keeps_preference() {
    let config = VenueConfig::default();
    let resolver = VenueResolver::new(&config);

    let outdoor = resolver.resolve("outdoor", "clear");
    assert_eq!(outdoor.venue, EffectiveVenue::Outdoor);
    assert!(outdoor.message.contains(EffectiveVenue::Outdoor.label()));

    let indoor = resolver.resolve_preference(VenuePreference::Indoor, "clouds");
    assert_eq!(indoor.venue, EffectiveVenue::Indoor);
}

#[test]
fn test_no_preference_resolves_to_either() {
    let config = VenueConfig::default();
    let resolver = VenueResolver::new(&config);

    for stated in ["", "상관없음", "anywhere"] {
        let resolution = resolver.resolve(stated, "clear");
        assert_eq!(resolution.venue, EffectiveVenue::Either);
        assert_eq!(resolution.message, config.messages.either);
    }
}

#[test]
fn test_custom_bad_weather_keywords() {
    let config = VenueConfig {
        bad_weather: BadWeatherConfig {
            keywords: vec!["dust".to_owned()],
        },
        ..VenueConfig::default()
    };
    let resolver = VenueResolver::new(&config);

    assert_eq!(resolver.resolve("실외", "Dust").venue, EffectiveVenue::Indoor);
    assert_eq!(resolver.resolve("실외", "rain").venue, EffectiveVenue::Outdoor);
}
