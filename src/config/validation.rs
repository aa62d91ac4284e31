//! Benchmark data validation rules
//!
//! Structural problems (no datasets, duplicate keys, unreadable run times)
//! stop the run. Suspicious but renderable data produces warnings.

use crate::{
    duration::DurationStyle,
    error::{AppError, Result},
    models::{BenchmarkData, Config},
};
use colored::*;
use std::collections::{BTreeMap, HashSet};

/// Validator for loaded benchmark data against the active configuration
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate benchmark data with comprehensive checks
    pub fn validate_benchmark(data: &BenchmarkData, config: &Config) -> Result<Vec<ValidationWarning>> {
        config.validate()?;

        Self::validate_structure(data)?;
        data.select(&config.datasets)?;

        let mut warnings = Vec::new();
        warnings.extend(Self::validate_runs(data, config)?);
        warnings.extend(Self::validate_clique_counts(data));

        if data.algorithms.is_empty() {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                "No algorithm results recorded; the comparison will be empty".to_string(),
            ));
        }

        Ok(warnings)
    }

    /// Datasets, algorithm names and histogram sizes must be well formed
    fn validate_structure(data: &BenchmarkData) -> Result<()> {
        if data.datasets.is_empty() {
            return Err(AppError::validation("Benchmark data declares no datasets"));
        }

        let mut keys = HashSet::new();
        for dataset in &data.datasets {
            if dataset.key.trim().is_empty() {
                return Err(AppError::validation(format!("Dataset '{}' has an empty key", dataset.title)));
            }
            if !keys.insert(dataset.key.as_str()) {
                return Err(AppError::validation(format!("Duplicate dataset key '{}'", dataset.key)));
            }

            if dataset.histogram_total().is_none() {
                return Err(AppError::validation(format!(
                    "Histogram counts for dataset '{}' add up to more than {}",
                    dataset.key,
                    u64::MAX
                )));
            }

            let mut sizes = HashSet::new();
            for bin in &dataset.histogram {
                if !sizes.insert(bin.size) {
                    return Err(AppError::validation(format!(
                        "Dataset '{}' lists clique size {} more than once",
                        dataset.key, bin.size
                    )));
                }
            }
        }

        let mut names = HashSet::new();
        for algorithm in &data.algorithms {
            if algorithm.name.trim().is_empty() {
                return Err(AppError::validation("Algorithm names cannot be empty"));
            }
            if !names.insert(algorithm.name.as_str()) {
                return Err(AppError::validation(format!("Duplicate algorithm '{}'", algorithm.name)));
            }
        }

        Ok(())
    }

    /// Every run time must parse; flag lossy labels and stray datasets
    fn validate_runs(data: &BenchmarkData, config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();
        let style = DurationStyle::from_show_hours(config.show_hours);

        for algorithm in &data.algorithms {
            for (dataset, run) in &algorithm.runs {
                let ms = run.duration_ms().map_err(|e| {
                    AppError::validation(format!(
                        "Algorithm '{}' on dataset '{}': {}",
                        algorithm.name, dataset, e
                    ))
                })?;

                if data.dataset(dataset).is_none() {
                    warnings.push(ValidationWarning::new(
                        ValidationLevel::Warning,
                        format!("Algorithm '{}' has a run for undeclared dataset '{}'; it is ignored", algorithm.name, dataset),
                    ));
                    continue;
                }

                if style.is_lossy_for(ms) {
                    warnings.push(ValidationWarning::new(
                        ValidationLevel::Warning,
                        format!(
                            "Run time {} of '{}' on '{}' is an hour or longer and will be shown without hours (use --show-hours)",
                            run.duration, algorithm.name, dataset
                        ),
                    ));
                }
            }
        }

        Ok(warnings)
    }

    /// Clique counts should agree across algorithms and with the histogram
    fn validate_clique_counts(data: &BenchmarkData) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for dataset in &data.datasets {
            let mut counts: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
            for algorithm in &data.algorithms {
                if let Some(run) = algorithm.run(&dataset.key) {
                    counts.entry(run.clique_count).or_default().push(algorithm.name.as_str());
                }
            }

            if counts.len() > 1 {
                let detail: Vec<String> = counts
                    .iter()
                    .map(|(count, names)| format!("{} ({})", count, names.join(", ")))
                    .collect();
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Warning,
                    format!("Algorithms disagree on the clique count for '{}': {}", dataset.key, detail.join(" vs ")),
                ));
            }

            let total = match dataset.histogram_total() {
                Some(total) if !dataset.histogram.is_empty() => total,
                _ => continue,
            };
            let first_recorded = data
                .algorithms
                .iter()
                .find_map(|algorithm| algorithm.run(&dataset.key))
                .map(|run| run.clique_count);

            if let Some(recorded) = first_recorded {
                if recorded != total {
                    warnings.push(ValidationWarning::new(
                        ValidationLevel::Warning,
                        format!(
                            "Histogram for '{}' sums to {} cliques but {} were recorded",
                            dataset.key, total, recorded
                        ),
                    ));
                }
            }
        }

        warnings
    }
}

/// Validation warning levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationLevel {
    Info,
    Warning,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
        }
    }

    /// Get color for terminal display
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Warning => Color::Yellow,
        }
    }
}

/// Benchmark data validation warning
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        let tag = format!("[{}]", self.level.as_str());
        if use_color {
            format!("{} {}", tag.color(self.level.color()).bold(), self.message)
        } else {
            format!("{} {}", tag, self.message)
        }
    }
}

/// Convenience function for benchmark data validation
pub fn validate_benchmark(data: &BenchmarkData, config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_benchmark(data, config)
}
