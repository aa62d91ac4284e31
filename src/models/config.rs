//! Configuration data model and validation

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal report with tables and bar charts
    #[default]
    Table,
    /// Report data as pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!("Unknown output format '{}' (expected table or json)", other))),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON benchmark data file; the embedded tables are used when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Report output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Keep whole hours when labelling durations
    #[serde(default = "default_show_hours")]
    pub show_hours: bool,

    /// Width of the longest histogram bar, in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Dataset keys to include; empty means all
    #[serde(default)]
    pub datasets: Vec<String>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            output_format: OutputFormat::default(),
            enable_color: default_enable_color(),
            show_hours: default_show_hours(),
            chart_width: default_chart_width(),
            datasets: Vec::new(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.data_file {
            if path.as_os_str().is_empty() {
                return Err(AppError::config("Data file path cannot be empty"));
            }
        }

        if self.chart_width == 0 {
            return Err(AppError::config("Chart width must be greater than 0"));
        }

        if self.chart_width > crate::defaults::MAX_CHART_WIDTH {
            return Err(AppError::config(format!(
                "Chart width cannot exceed {}",
                crate::defaults::MAX_CHART_WIDTH
            )));
        }

        for key in &self.datasets {
            if key.trim().is_empty() {
                return Err(AppError::config("Dataset filter entries cannot be empty"));
            }
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(path) = std::env::var(crate::defaults::DATA_FILE_ENV) {
            let path = path.trim();
            if !path.is_empty() {
                self.data_file = Some(PathBuf::from(path));
            }
        }

        if let Ok(format) = std::env::var("OUTPUT_FORMAT") {
            self.output_format = format.parse()?;
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        if let Ok(show_hours) = std::env::var("SHOW_HOURS") {
            self.show_hours = show_hours.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid SHOW_HOURS value '{}': {}", show_hours, e)))?;
        }

        if let Ok(width) = std::env::var("CHART_WIDTH") {
            self.chart_width = width.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid CHART_WIDTH value '{}': {}", width, e)))?;
        }

        if let Ok(datasets) = std::env::var("DATASETS") {
            self.datasets = split_list(&datasets);
        }

        Ok(())
    }
}

/// Split a comma-separated list, dropping blanks
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// Default value functions for serde
fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

fn default_show_hours() -> bool {
    crate::defaults::DEFAULT_SHOW_HOURS
}

fn default_chart_width() -> usize {
    crate::defaults::DEFAULT_CHART_WIDTH
}
