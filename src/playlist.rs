// ABOUTME: Workout playlist query builder keyed on intensity, purpose and primary emotion
// ABOUTME: Collects deduplicated playlists from any search backend, skipping failed queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use async_trait::async_trait;
use moodfit_core::models::IntensityTier;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppResult;

const HIGH_QUERIES: [&str; 3] = [
    "high energy workout playlist",
    "HIIT gym music",
    "cardio beast mode",
];
const MEDIUM_QUERIES: [&str; 3] = [
    "motivating workout playlist",
    "cardio running music",
    "upbeat fitness",
];
const LOW_QUERIES: [&str; 3] = [
    "stretching yoga chill playlist",
    "lofi workout",
    "calm fitness music",
];

/// Purpose keyword to extra queries, matched as substrings of the purpose
const PURPOSE_QUERIES: [(&str, [&str; 2]); 5] = [
    ("근력", ["strength training playlist", "gym motivation music"]),
    ("체력", ["endurance workout playlist", "running cardio music"]),
    ("유연", ["yoga stretching relaxing", "pilates calm playlist"]),
    ("다이어트", ["fat burn cardio playlist", "dance workout music"]),
    ("스트레스", ["stress relief chill playlist", "relaxing workout music"]),
];

/// Search queries for the tier, purpose and primary emotion, first occurrence kept
#[must_use]
pub fn playlist_queries(tier: IntensityTier, purpose: &str, primary_emotion: &str) -> Vec<String> {
    let base = match tier {
        IntensityTier::High => HIGH_QUERIES,
        IntensityTier::Medium => MEDIUM_QUERIES,
        IntensityTier::Low => LOW_QUERIES,
    };

    let mut queries: Vec<String> = base.iter().map(|q| (*q).to_owned()).collect();
    for (keyword, extra) in PURPOSE_QUERIES {
        if purpose.contains(keyword) {
            queries.extend(extra.iter().map(|q| (*q).to_owned()));
        }
    }

    let emotion = primary_emotion.trim();
    if !emotion.is_empty() {
        queries.push(format!("{emotion} mood playlist"));
        queries.push(format!("{emotion} 음악 플레이리스트"));
    }

    let mut seen = HashSet::new();
    queries.retain(|q| seen.insert(q.clone()));
    queries
}

/// A playlist found by a search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Display name
    pub name: String,
    /// Public URL, unique per playlist
    pub url: String,
}

/// Playlist search backend
#[async_trait]
pub trait PlaylistSearch: Send + Sync {
    /// Up to `limit` playlists for a query
    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<Playlist>>;
}

/// Run queries in order, deduplicate by URL and stop at `total`
pub async fn collect_playlists<S: PlaylistSearch + ?Sized>(
    search: &S,
    queries: &[String],
    per_query: usize,
    total: usize,
) -> Vec<Playlist> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for query in queries {
        if found.len() >= total {
            break;
        }
        let results = match search.search(query, per_query).await {
            Ok(results) => results,
            Err(e) => {
                warn!(query, error = %e, "Playlist search failed, skipping query");
                continue;
            }
        };
        for playlist in results {
            if found.len() >= total {
                break;
            }
            if seen.insert(playlist.url.clone()) {
                found.push(playlist);
            }
        }
    }
    found
}
