//! Recorded benchmark results: datasets, histograms and per-algorithm runs

use crate::duration::{self, DurationMs, FormatError};
use crate::error::{AppError, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Number of maximal cliques of one size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub size: u32,
    pub count: u64,
}

impl HistogramBin {
    pub const fn new(size: u32, count: u64) -> Self {
        Self { size, count }
    }
}

/// A graph dataset and its clique-size distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Identifier used by algorithm runs, e.g. `enron`
    pub key: String,
    /// Display name, e.g. `Email-Enron`
    pub title: String,
    /// Clique-size histogram; empty when no distribution was recorded
    #[serde(default)]
    pub histogram: Vec<HistogramBin>,
}

impl Dataset {
    pub fn new(key: impl Into<String>, title: impl Into<String>, histogram: Vec<HistogramBin>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            histogram,
        }
    }

    /// Sum of all histogram counts; `None` when the sum does not fit in `u64`
    pub fn histogram_total(&self) -> Option<u64> {
        self.histogram
            .iter()
            .try_fold(0u64, |total, bin| total.checked_add(bin.count))
    }

    /// Largest single bin count, used to scale bar charts
    pub fn histogram_peak(&self) -> Option<&HistogramBin> {
        self.histogram.iter().max_by_key(|bin| bin.count)
    }
}

/// One recorded run of an algorithm on a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub clique_count: u64,
    /// Run time as recorded, `HH:MM:SS:mmm`
    pub duration: String,
}

impl RunRecord {
    pub fn new(clique_count: u64, duration: impl Into<String>) -> Self {
        Self {
            clique_count,
            duration: duration.into(),
        }
    }

    pub fn duration_ms(&self) -> std::result::Result<DurationMs, FormatError> {
        duration::parse(&self.duration)
    }
}

/// Everything recorded for one enumeration algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub name: String,
    /// Dataset key -> recorded run
    #[serde(default)]
    pub runs: BTreeMap<String, RunRecord>,
}

impl AlgorithmResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: BTreeMap::new(),
        }
    }

    pub fn with_run(mut self, dataset: impl Into<String>, clique_count: u64, duration: impl Into<String>) -> Self {
        self.runs.insert(dataset.into(), RunRecord::new(clique_count, duration));
        self
    }

    pub fn run(&self, dataset: &str) -> Option<&RunRecord> {
        self.runs.get(dataset)
    }
}

/// The complete set of recorded results a report is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkData {
    /// Datasets in declaration order
    pub datasets: Vec<Dataset>,
    /// Algorithms in declaration order
    #[serde(default)]
    pub algorithms: Vec<AlgorithmResult>,
}

impl BenchmarkData {
    /// The embedded result tables
    pub fn builtin() -> Self {
        super::builtin::benchmark_data()
    }

    /// Parse benchmark data from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(AppError::from)
    }

    /// Load benchmark data from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file '{}'", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse data file '{}'", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(AppError::from)
    }

    pub fn dataset(&self, key: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.key == key)
    }

    pub fn algorithm(&self, name: &str) -> Option<&AlgorithmResult> {
        self.algorithms.iter().find(|a| a.name == name)
    }

    pub fn dataset_keys(&self) -> Vec<&str> {
        self.datasets.iter().map(|d| d.key.as_str()).collect()
    }

    /// Datasets named by `filter`, in declaration order; all of them when
    /// the filter is empty
    pub fn select(&self, filter: &[String]) -> Result<Vec<&Dataset>> {
        if let Some(unknown) = filter.iter().find(|key| self.dataset(key).is_none()) {
            return Err(AppError::validation(format!(
                "Unknown dataset '{}' (available: {})",
                unknown,
                self.dataset_keys().join(", ")
            )));
        }

        Ok(self
            .datasets
            .iter()
            .filter(|d| filter.is_empty() || filter.iter().any(|key| *key == d.key))
            .collect())
    }
}
