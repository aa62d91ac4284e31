//! Output formatting and display system
//!
//! This module provides a flexible output formatting system for benchmark
//! reports, supporting colored and plain text output with table and chart
//! formatting, plus a JSON rendering of the raw report data.

mod formatter;
mod colored;

pub use formatter::{
    OutputFormatter,
    PlainFormatter,
    TableFormat,
    FormattingOptions,
    Column,
    Alignment,
    RowData,
    format_count,
    bar_length,
};
pub use colored::{
    ColoredFormatter,
    ColorScheme,
    SpeedLevel,
};

use crate::{
    error::{AppError, Result},
    models::{Config, OutputFormat},
    report::Report,
};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool, verbose: bool, chart_width: usize) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
            table_borders: true,
            chart_width,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }

    /// Create the formatter a configuration asks for
    pub fn from_config(config: &Config) -> Box<dyn OutputFormatter> {
        Self::create_formatter(config.enable_color, config.verbose, config.chart_width)
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn OutputFormatter> {
        Self::create_formatter(false, false, crate::defaults::DEFAULT_CHART_WIDTH)
    }
}

/// Main output coordinator that handles report display
pub struct OutputCoordinator {
    formatter: Box<dyn OutputFormatter>,
}

impl OutputCoordinator {
    /// Create a new output coordinator with the specified formatter
    pub fn new(formatter: Box<dyn OutputFormatter>) -> Self {
        Self { formatter }
    }

    /// Render a report in the requested format
    pub fn render(&self, report: &Report, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => self.render_text(report),
            OutputFormat::Json => render_json(report),
        }
    }

    /// Render the full terminal report
    pub fn render_text(&self, report: &Report) -> Result<String> {
        let mut sections = Vec::new();

        sections.push(self.formatter.format_header("Maximal Clique Enumeration Results")?);

        for (index, section) in report.datasets.iter().enumerate() {
            let mut block = self.formatter.format_dataset_summary(section)?;
            block.push_str("\n\n");
            block.push_str(&self.formatter.format_histogram(section, index)?);
            sections.push(block);
        }

        sections.push(self.formatter.format_comparison_table(report)?);
        sections.push(self.formatter.format_fastest(report)?);

        Ok(sections.join("\n\n"))
    }

    /// Render validation warnings, one per line
    pub fn render_warnings(&self, warnings: &[String]) -> Result<String> {
        let lines = warnings
            .iter()
            .map(|w| self.formatter.format_warning(w))
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}

/// Pretty-printed JSON of the report data
pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| AppError::output(format!("Failed to serialize report: {}", e)))
}
