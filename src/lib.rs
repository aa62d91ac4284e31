//! Clique Report
//!
//! Presents maximal clique enumeration benchmark results: clique size
//! histograms per dataset, run times of the Tomita, ELS and Chiba-Nishizeki
//! algorithms, and the fastest algorithm on each dataset.

pub mod app;
pub mod cli;
pub mod comparison;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod report;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use duration::{DurationMs, DurationStyle, FormatError};
pub use models::{AlgorithmResult, BenchmarkData, Config, Dataset, HistogramBin, OutputFormat};
pub use comparison::{build_rows, fastest_per_dataset, ComparisonRow, FastestByDataset};
pub use report::{Report, ReportBuilder, ReportOptions};
pub use output::{OutputFormatter, ColoredFormatter, PlainFormatter, OutputCoordinator, OutputFormatterFactory};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    pub const DEFAULT_ENABLE_COLOR: bool = true;
    pub const DEFAULT_SHOW_HOURS: bool = false;
    pub const DEFAULT_CHART_WIDTH: usize = 50;
    pub const MAX_CHART_WIDTH: usize = 200;

    /// Environment variable naming the JSON data file
    pub const DATA_FILE_ENV: &str = "CLIQUE_REPORT_DATA";
}
