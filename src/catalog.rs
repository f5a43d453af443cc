// ABOUTME: Exercise catalog ingestion from CSV with tier normalization and column validation
// ABOUTME: CatalogStore keeps an immutable snapshot that reloads swap in whole
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Catalog
//!
//! The catalog is read once from a CSV file with the columns
//! `운동명, 운동강도, 운동목적, 감정매핑, 단위체중당에너지소비량`. Missing
//! columns and unparseable tiers are fatal. Readers take an
//! `Arc<ExerciseCatalog>` snapshot and keep it for the whole request, so a
//! concurrent reload never exposes a half-built catalog.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use encoding_rs::{EUC_KR, UTF_8};
use moodfit_core::constants::catalog as columns;
use moodfit_core::models::{Exercise, IntensityTier};
use moodfit_intelligence::split_list;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::{AppError, AppResult};

/// Byte-order mark some spreadsheet exports prepend to the first header
const BOM: char = '\u{feff}';

/// Decode catalog bytes, trying UTF-8 before CP949
fn decode_catalog(bytes: &[u8]) -> AppResult<Cow<'_, str>> {
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return Ok(text);
    }
    let text = EUC_KR
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| AppError::catalog_invalid("catalog is neither UTF-8 nor CP949 text"))?;
    debug!("Decoded exercise catalog as CP949");
    Ok(text)
}

/// Normalize a raw tier cell: drop spaces, collapse doubled commas, trim commas
#[must_use]
pub fn normalize_tier(raw: &str) -> String {
    let mut tier: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    while tier.contains(",,") {
        tier = tier.replace(",,", ",");
    }
    tier.trim_matches(',').to_owned()
}

/// Parse an energy coefficient, anything non-numeric or negative becomes 0
#[must_use]
pub fn parse_energy(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Column positions resolved from the header row
struct ColumnIndex {
    name: usize,
    tier: usize,
    purposes: usize,
    emotions: usize,
    energy: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> AppResult<Self> {
        let cleaned: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches(BOM).trim().to_owned())
            .collect();
        let find = |column: &str| {
            cleaned.iter().position(|h| h == column).ok_or_else(|| {
                AppError::catalog_invalid(format!("missing required column '{column}'"))
                    .with_resource_id(column)
            })
        };
        Ok(Self {
            name: find(columns::COLUMN_NAME)?,
            tier: find(columns::COLUMN_TIER)?,
            purposes: find(columns::COLUMN_PURPOSES)?,
            emotions: find(columns::COLUMN_EMOTIONS)?,
            energy: find(columns::COLUMN_ENERGY)?,
        })
    }
}

/// Exercises per tier for one purpose
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PurposeSummary {
    /// Purpose tag
    pub purpose: String,
    /// Low-tier exercise count
    pub low: usize,
    /// Medium-tier exercise count
    pub medium: usize,
    /// High-tier exercise count
    pub high: usize,
}

/// Validated, read-only exercise catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
    source: Option<PathBuf>,
}

impl ExerciseCatalog {
    /// Catalog from already-validated exercises
    #[must_use]
    pub const fn from_exercises(exercises: Vec<Exercise>) -> Self {
        Self {
            exercises,
            source: None,
        }
    }

    /// Load a catalog CSV file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be opened and
    /// `CatalogInvalid` for missing columns or unparseable tiers.
    pub fn from_csv_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        info!(
            path = %path.display(),
            exercises = catalog.len(),
            "Loaded exercise catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from any CSV reader
    ///
    /// The bytes may be UTF-8 (with or without BOM) or CP949.
    ///
    /// # Errors
    ///
    /// Returns `CatalogInvalid` for undecodable text, malformed CSV, missing
    /// columns or unparseable tiers.
    pub fn from_reader<R: Read>(mut reader: R) -> AppResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = decode_catalog(&bytes)?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let columns = ColumnIndex::resolve(csv_reader.headers()?)?;

        let mut exercises = Vec::new();
        let mut seen = HashSet::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            // Header is line 1
            let line = index + 2;
            let cell = |i: usize| row.get(i).unwrap_or_default().trim();

            let name = cell(columns.name);
            if name.is_empty() {
                warn!(line, "Skipping catalog row without exercise name");
                continue;
            }

            let raw_tier = cell(columns.tier);
            let tier = IntensityTier::parse(&normalize_tier(raw_tier)).ok_or_else(|| {
                AppError::catalog_invalid(format!(
                    "line {line}: exercise '{name}' has unknown intensity '{raw_tier}'"
                ))
                .with_resource_id(name.to_owned())
            })?;

            if !seen.insert(name.to_owned()) {
                warn!(line, name, "Duplicate exercise name, keeping first occurrence");
                continue;
            }

            let raw_energy = cell(columns.energy);
            if !raw_energy.is_empty() && !raw_energy.parse::<f64>().is_ok_and(|v| v >= 0.0) {
                debug!(line, name, raw_energy, "Energy coefficient coerced to 0");
            }
            let energy_coefficient = parse_energy(raw_energy);

            exercises.push(Exercise {
                name: name.to_owned(),
                tier,
                purposes: split_list(cell(columns.purposes)),
                emotions: split_list(cell(columns.emotions)),
                energy_coefficient,
            });
        }

        Ok(Self::from_exercises(exercises))
    }

    /// All exercises in file order
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// File the catalog was loaded from
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// True when the catalog has no exercises
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Look an exercise up by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    /// Exercise counts per purpose and tier, purposes sorted
    #[must_use]
    pub fn summary(&self) -> Vec<PurposeSummary> {
        let mut by_purpose: BTreeMap<&str, PurposeSummary> = BTreeMap::new();
        for exercise in &self.exercises {
            for purpose in &exercise.purposes {
                let entry = by_purpose
                    .entry(purpose.as_str())
                    .or_insert_with(|| PurposeSummary {
                        purpose: purpose.clone(),
                        ..PurposeSummary::default()
                    });
                match exercise.tier {
                    IntensityTier::Low => entry.low += 1,
                    IntensityTier::Medium => entry.medium += 1,
                    IntensityTier::High => entry.high += 1,
                }
            }
        }
        by_purpose.into_values().collect()
    }
}

/// Copy-on-load holder of the current catalog snapshot
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Arc<ExerciseCatalog>>,
}

impl CatalogStore {
    /// Store holding the given catalog
    #[must_use]
    pub fn new(catalog: ExerciseCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Load the initial catalog from a file
    ///
    /// # Errors
    ///
    /// Propagates catalog loading errors
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        ExerciseCatalog::from_csv_path(path).map(Self::new)
    }

    /// Current snapshot, valid for as long as the caller holds it
    #[must_use]
    pub fn snapshot(&self) -> Arc<ExerciseCatalog> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Swap in a fully built catalog
    pub fn replace(&self, catalog: ExerciseCatalog) {
        let next = Arc::new(catalog);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Parse a new catalog from `path` and swap it in only if it is valid
    ///
    /// # Errors
    ///
    /// Returns the loading error and leaves the current snapshot untouched
    pub fn reload(&self, path: impl AsRef<Path>) -> AppResult<Arc<ExerciseCatalog>> {
        let catalog = ExerciseCatalog::from_csv_path(path)?;
        self.replace(catalog);
        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tier_strips_noise() {
        assert_eq!(normalize_tier(" 중 강도 ,"), "중강도");
        assert_eq!(normalize_tier(",,고강도,,"), "고강도");
        assert_eq!(normalize_tier("저강도"), "저강도");
    }

    #[test]
    fn test_parse_energy_coerces() {
        assert!((parse_energy("0.15") - 0.15).abs() < f64::EPSILON);
        assert!(parse_energy("n/a").abs() < f64::EPSILON);
        assert!(parse_energy("-1").abs() < f64::EPSILON);
    }
}
