//! Cross-algorithm run-time comparison
//!
//! Turns per-algorithm recorded runs into one row per dataset and picks
//! the fastest algorithm for each dataset. Row order follows the dataset
//! order given by the caller, and within a row algorithms keep their
//! declaration order.

use crate::duration::DurationMs;
use crate::error::{AppError, Result};
use crate::models::AlgorithmResult;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Parsed run time of one algorithm on one dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmDuration {
    pub algorithm: String,
    pub ms: DurationMs,
}

/// One dataset's run times across all algorithms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub dataset: String,
    pub durations: Vec<AlgorithmDuration>,
}

impl ComparisonRow {
    pub fn duration_of(&self, algorithm: &str) -> Option<DurationMs> {
        self.durations
            .iter()
            .find(|d| d.algorithm == algorithm)
            .map(|d| d.ms)
    }

    /// Minimum duration; the first algorithm wins ties
    pub fn fastest(&self) -> Option<&AlgorithmDuration> {
        self.durations.iter().min_by_key(|d| d.ms)
    }

    /// Each algorithm's time as a multiple of the fastest time.
    ///
    /// A zero fastest time yields 1.0 for other zero entries and infinity
    /// for the rest.
    pub fn slowdown_factors(&self) -> Vec<(&str, f64)> {
        let best = match self.fastest() {
            Some(best) => best.ms.as_millis(),
            None => return Vec::new(),
        };
        self.durations
            .iter()
            .map(|d| {
                let ms = d.ms.as_millis();
                let factor = if best == 0 {
                    if ms == 0 { 1.0 } else { f64::INFINITY }
                } else {
                    ms as f64 / best as f64
                };
                (d.algorithm.as_str(), factor)
            })
            .collect()
    }
}

/// Winning algorithm for a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fastest {
    pub algorithm: String,
    pub ms: DurationMs,
}

/// Dataset -> fastest algorithm, in dataset order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FastestByDataset {
    entries: Vec<(String, Fastest)>,
}

impl FastestByDataset {
    pub fn get(&self, dataset: &str) -> Option<&Fastest> {
        self.entries
            .iter()
            .find(|(key, _)| key == dataset)
            .map(|(_, fastest)| fastest)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fastest)> {
        self.entries.iter().map(|(key, fastest)| (key.as_str(), fastest))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FastestByDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (dataset, fastest) in &self.entries {
            map.serialize_entry(dataset, fastest)?;
        }
        map.end()
    }
}

/// Build one comparison row per dataset.
///
/// Fails on the first run time that does not parse or the first algorithm
/// without a recorded run for a requested dataset; no partial rows are
/// returned.
pub fn build_rows<S: AsRef<str>>(results: &[AlgorithmResult], datasets: &[S]) -> Result<Vec<ComparisonRow>> {
    datasets
        .iter()
        .map(|dataset| build_row(results, dataset.as_ref()))
        .collect()
}

fn build_row(results: &[AlgorithmResult], dataset: &str) -> Result<ComparisonRow> {
    let durations = results
        .iter()
        .map(|algorithm| -> Result<AlgorithmDuration> {
            let run = algorithm.run(dataset).ok_or_else(|| {
                AppError::data(format!(
                    "Algorithm '{}' has no recorded run for dataset '{}'",
                    algorithm.name, dataset
                ))
            })?;
            Ok(AlgorithmDuration {
                algorithm: algorithm.name.clone(),
                ms: run.duration_ms()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ComparisonRow {
        dataset: dataset.to_string(),
        durations,
    })
}

/// Pick the minimum-duration algorithm for each dataset.
///
/// Ties go to the algorithm declared first. Datasets with no algorithms
/// have no winner and are left out.
pub fn fastest_per_dataset<S: AsRef<str>>(results: &[AlgorithmResult], datasets: &[S]) -> Result<FastestByDataset> {
    let rows = build_rows(results, datasets)?;
    Ok(fastest_from_rows(&rows))
}

/// Same as [`fastest_per_dataset`] for rows that are already built
pub fn fastest_from_rows(rows: &[ComparisonRow]) -> FastestByDataset {
    let entries = rows
        .iter()
        .filter_map(|row| {
            row.fastest().map(|best| {
                (
                    row.dataset.clone(),
                    Fastest {
                        algorithm: best.algorithm.clone(),
                        ms: best.ms,
                    },
                )
            })
        })
        .collect();
    FastestByDataset { entries }
}
