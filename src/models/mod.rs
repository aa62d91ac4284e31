//! Data models and structures for the clique benchmark report

pub mod benchmark;
pub mod builtin;
pub mod config;

// Re-export main model types
pub use benchmark::{AlgorithmResult, BenchmarkData, Dataset, HistogramBin, RunRecord};
pub use config::{split_list, Config, OutputFormat};
