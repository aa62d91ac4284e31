//! Report generation
//!
//! A [`Report`] is the plain-data view of a benchmark: per-dataset
//! summaries and histogram series, the comparison rows and the fastest
//! algorithm per dataset. Renderers only ever see this structure.

use crate::comparison::{self, ComparisonRow, FastestByDataset};
use crate::duration::{DurationMs, DurationStyle};
use crate::error::Result;
use crate::models::{BenchmarkData, Config, Dataset, HistogramBin};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What goes into a report and how durations are labelled
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOptions {
    /// Dataset keys to include; empty means all, in declaration order
    pub datasets: Vec<String>,
    pub duration_style: DurationStyle,
}

impl ReportOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            datasets: config.datasets.clone(),
            duration_style: DurationStyle::from_show_hours(config.show_hours),
        }
    }
}

/// One algorithm's recorded run as shown in a dataset summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub algorithm: String,
    pub clique_count: u64,
    /// Run time exactly as recorded
    pub recorded: String,
    pub ms: DurationMs,
    /// Run time rendered in the report's duration style
    pub label: String,
}

/// Everything shown for one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSection {
    pub key: String,
    pub title: String,
    /// Reported clique count; taken from the first algorithm, or the
    /// histogram total when no algorithm ran on this dataset
    pub total_cliques: Option<u64>,
    pub histogram: Vec<HistogramBin>,
    pub runs: Vec<RunSummary>,
}

impl DatasetSection {
    pub fn has_histogram(&self) -> bool {
        !self.histogram.is_empty()
    }

    pub fn histogram_peak(&self) -> u64 {
        self.histogram.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

/// Complete report data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub duration_style: DurationStyle,
    /// Algorithm names in declaration order
    pub algorithms: Vec<String>,
    pub datasets: Vec<DatasetSection>,
    pub comparison: Vec<ComparisonRow>,
    pub fastest: FastestByDataset,
}

impl Report {
    pub fn section(&self, key: &str) -> Option<&DatasetSection> {
        self.datasets.iter().find(|s| s.key == key)
    }

    /// Render a duration in this report's style
    pub fn label(&self, ms: DurationMs) -> String {
        self.duration_style.render(ms)
    }
}

/// Builds reports from benchmark data
pub struct ReportBuilder;

impl ReportBuilder {
    /// Build a report for the selected datasets.
    ///
    /// Fails if a filtered dataset is unknown, an algorithm lacks a run for
    /// a selected dataset, or any selected run time is malformed.
    pub fn build(data: &BenchmarkData, options: &ReportOptions) -> Result<Report> {
        let selected = data.select(&options.datasets)?;
        let keys: Vec<&str> = selected.iter().map(|d| d.key.as_str()).collect();

        let comparison = comparison::build_rows(&data.algorithms, &keys)?;
        let fastest = comparison::fastest_from_rows(&comparison);

        let datasets = selected
            .iter()
            .map(|dataset| Self::section(data, dataset, options.duration_style))
            .collect::<Result<Vec<_>>>()?;

        Ok(Report {
            generated_at: Utc::now(),
            duration_style: options.duration_style,
            algorithms: data.algorithms.iter().map(|a| a.name.clone()).collect(),
            datasets,
            comparison,
            fastest,
        })
    }

    fn section(data: &BenchmarkData, dataset: &Dataset, style: DurationStyle) -> Result<DatasetSection> {
        let mut runs = Vec::with_capacity(data.algorithms.len());
        for algorithm in &data.algorithms {
            // build_rows already rejected missing runs for selected datasets
            if let Some(run) = algorithm.run(&dataset.key) {
                let ms = run.duration_ms()?;
                runs.push(RunSummary {
                    algorithm: algorithm.name.clone(),
                    clique_count: run.clique_count,
                    recorded: run.duration.clone(),
                    ms,
                    label: style.render(ms),
                });
            }
        }

        let total_cliques = runs
            .first()
            .map(|run| run.clique_count)
            .or_else(|| {
                if dataset.histogram.is_empty() {
                    None
                } else {
                    dataset.histogram_total()
                }
            });

        Ok(DatasetSection {
            key: dataset.key.clone(),
            title: dataset.title.clone(),
            total_cliques,
            histogram: dataset.histogram.clone(),
            runs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::builtin;
    use crate::models::AlgorithmResult;

    #[test]
    fn test_builtin_report() {
        let report = ReportBuilder::build(&BenchmarkData::builtin(), &ReportOptions::default()).unwrap();

        assert_eq!(report.algorithms, vec![builtin::TOMITA, builtin::ELS, builtin::CHIBA_NISHIZEKI]);
        assert_eq!(report.datasets.len(), 3);
        assert_eq!(report.comparison.len(), 3);

        let enron = report.section(builtin::ENRON).unwrap();
        assert_eq!(enron.title, "Email-Enron");
        assert_eq!(enron.total_cliques, Some(226_859));
        assert_eq!(enron.histogram.len(), 19);
        assert_eq!(enron.runs[0].label, "0m 52s 187ms");
        assert_eq!(enron.runs[0].recorded, "00:00:52:187");

        assert_eq!(report.fastest.get(builtin::ENRON).unwrap().algorithm, builtin::TOMITA);
        assert_eq!(report.fastest.get(builtin::AS_SKITTER).unwrap().algorithm, builtin::ELS);
    }

    #[test]
    fn test_dataset_filter() {
        let options = ReportOptions {
            datasets: vec![builtin::WIKI_VOTE.to_string()],
            ..ReportOptions::default()
        };
        let report = ReportBuilder::build(&BenchmarkData::builtin(), &options).unwrap();
        assert_eq!(report.datasets.len(), 1);
        assert_eq!(report.comparison[0].dataset, builtin::WIKI_VOTE);
        assert_eq!(report.fastest.len(), 1);
        assert!(report.section(builtin::ENRON).is_none());
    }

    #[test]
    fn test_unknown_dataset_filter_fails() {
        let options = ReportOptions {
            datasets: vec!["livejournal".to_string()],
            ..ReportOptions::default()
        };
        let err = ReportBuilder::build(&BenchmarkData::builtin(), &options).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_extended_labels() {
        let data = BenchmarkData {
            datasets: vec![Dataset::new("big", "Big", Vec::new())],
            algorithms: vec![AlgorithmResult::new("Slow").with_run("big", 5, "01:01:01:000")],
        };
        let compatible = ReportBuilder::build(&data, &ReportOptions::default()).unwrap();
        assert_eq!(compatible.datasets[0].runs[0].label, "1m 1s 0ms");

        let options = ReportOptions {
            duration_style: DurationStyle::Extended,
            ..ReportOptions::default()
        };
        let extended = ReportBuilder::build(&data, &options).unwrap();
        assert_eq!(extended.datasets[0].runs[0].label, "1h 1m 1s 0ms");
        assert_eq!(extended.label(DurationMs::from_millis(3_661_000)), "1h 1m 1s 0ms");
    }

    #[test]
    fn test_total_cliques_falls_back_to_histogram() {
        let data = BenchmarkData {
            datasets: vec![
                Dataset::new("h", "Histogram only", vec![HistogramBin::new(2, 4), HistogramBin::new(3, 1)]),
                Dataset::new("e", "Empty", Vec::new()),
                Dataset::new("o", "Overflowing", vec![HistogramBin::new(2, u64::MAX), HistogramBin::new(3, 1)]),
            ],
            algorithms: Vec::new(),
        };
        let report = ReportBuilder::build(&data, &ReportOptions::default()).unwrap();
        assert_eq!(report.section("h").unwrap().total_cliques, Some(5));
        assert_eq!(report.section("h").unwrap().histogram_peak(), 4);
        assert_eq!(report.section("e").unwrap().total_cliques, None);
        assert_eq!(report.section("o").unwrap().total_cliques, None);
        assert!(report.fastest.is_empty());
    }

    #[test]
    fn test_malformed_run_fails_report() {
        let mut data = BenchmarkData::builtin();
        data.algorithms[1] = AlgorithmResult::new(builtin::ELS)
            .with_run(builtin::ENRON, 1, "00:01:05")
            .with_run(builtin::WIKI_VOTE, 1, "00:00:46:913")
            .with_run(builtin::AS_SKITTER, 1, "00:06:14:392");
        let err = ReportBuilder::build(&data, &ReportOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }

    #[test]
    fn test_report_serializes() {
        let report = ReportBuilder::build(&BenchmarkData::builtin(), &ReportOptions::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["duration_style"], "compatible");
        assert_eq!(value["comparison"][0]["dataset"], "enron");
        assert_eq!(value["fastest"]["wiki-vote"]["algorithm"], "Tomita");
        assert_eq!(value["datasets"][0]["histogram"][0]["count"], 14070);
    }
}
