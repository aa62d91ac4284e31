//! Core formatting traits and implementations
//!
//! This module defines the output formatting interface and provides
//! a plain text implementation with table and bar chart rendering.

use crate::{
    error::Result,
    report::{DatasetSection, Report},
};
use std::fmt::Write as _;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> Result<String>;

    /// Format the summary block of one dataset (clique count and run times)
    fn format_dataset_summary(&self, section: &DatasetSection) -> Result<String>;

    /// Format the clique-size histogram of one dataset as a bar chart;
    /// `index` is the dataset's position in the report
    fn format_histogram(&self, section: &DatasetSection, index: usize) -> Result<String>;

    /// Format the cross-algorithm comparison table
    fn format_comparison_table(&self, report: &Report) -> Result<String>;

    /// Format the fastest-algorithm section
    fn format_fastest(&self, report: &Report) -> Result<String>;

    /// Format error messages
    fn format_error(&self, error: &str) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;

    /// Format success messages
    fn format_success(&self, message: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Enable verbose mode with detailed information
    pub verbose_mode: bool,
    /// Show table borders
    pub table_borders: bool,
    /// Width of the longest histogram bar
    pub chart_width: usize,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
            table_borders: true,
            chart_width: crate::defaults::DEFAULT_CHART_WIDTH,
        }
    }
}

/// Table formatting configuration
#[derive(Debug, Clone)]
pub struct TableFormat {
    /// Column definitions
    pub columns: Vec<Column>,
    /// Show borders around table
    pub show_borders: bool,
    /// Show header row
    pub show_header: bool,
    /// Minimum column width
    pub min_column_width: usize,
    /// Maximum column width
    pub max_column_width: usize,
}

/// Column definition for table formatting
#[derive(Debug, Clone)]
pub struct Column {
    /// Column header
    pub header: String,
    /// Column alignment
    pub alignment: Alignment,
    /// Minimum width
    pub min_width: usize,
    /// Maximum width
    pub max_width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>, alignment: Alignment, min_width: usize, max_width: usize) -> Self {
        Self {
            header: header.into(),
            alignment,
            min_width,
            max_width,
        }
    }
}

/// Text alignment options
#[derive(Debug, Clone)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// Row data for table formatting
pub type RowData = Vec<String>;

/// Styles an already padded cell: (row index, column index, padded text).
/// Header cells are passed with row index `None`.
pub(crate) type CellStyler<'a> = &'a dyn Fn(Option<usize>, usize, &str) -> String;

/// Group digits in thousands: `226859` -> `226,859`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Bar length for `count` when `peak` fills `width` characters.
/// Non-zero counts always get at least one character.
pub fn bar_length(count: u64, peak: u64, width: usize) -> usize {
    if count == 0 || peak == 0 {
        return 0;
    }
    let scaled = (count as f64 / peak as f64 * width as f64).round() as usize;
    scaled.clamp(1, width)
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    /// Create a table with the given format and data
    pub(crate) fn create_table(&self, format: &TableFormat, rows: &[RowData]) -> Result<String> {
        self.create_styled_table(format, rows, &|_: Option<usize>, _: usize, cell: &str| cell.to_string())
    }

    /// Create a table, passing each padded cell through `styler`
    pub(crate) fn create_styled_table(&self, format: &TableFormat, rows: &[RowData], styler: CellStyler<'_>) -> Result<String> {
        if rows.is_empty() {
            return Ok(String::new());
        }

        let column_widths = self.calculate_column_widths(format, rows);

        let mut output = String::new();

        // Header
        if format.show_header && !format.columns.is_empty() {
            if format.show_borders {
                output.push_str(&self.create_horizontal_border(&column_widths));
                output.push('\n');
            }

            let headers: Vec<String> = format.columns.iter().map(|c| c.header.clone()).collect();
            output.push_str(&self.create_row(&headers, &column_widths, format, None, styler));
            output.push('\n');

            if format.show_borders {
                output.push_str(&self.create_horizontal_border(&column_widths));
                output.push('\n');
            }
        }

        // Data rows
        for (row_idx, row) in rows.iter().enumerate() {
            output.push_str(&self.create_row(row, &column_widths, format, Some(row_idx), styler));
            output.push('\n');
        }

        // Bottom border
        if format.show_borders {
            output.push_str(&self.create_horizontal_border(&column_widths));
        }

        Ok(output)
    }

    /// Calculate optimal column widths
    fn calculate_column_widths(&self, format: &TableFormat, rows: &[RowData]) -> Vec<usize> {
        let num_columns = format.columns.len().max(
            rows.iter().map(|r| r.len()).max().unwrap_or(0)
        );

        (0..num_columns)
            .map(|col_idx| {
                let mut width = match format.columns.get(col_idx) {
                    Some(col) => col.min_width.max(text_width(&col.header)),
                    None => format.min_column_width,
                };

                for row in rows {
                    if let Some(cell) = row.get(col_idx) {
                        width = width.max(text_width(cell));
                    }
                }

                match format.columns.get(col_idx) {
                    Some(col) => width.min(col.max_width),
                    None => width.min(format.max_column_width),
                }
            })
            .collect()
    }

    /// Create a table row
    fn create_row(
        &self,
        data: &[String],
        widths: &[usize],
        format: &TableFormat,
        row_idx: Option<usize>,
        styler: CellStyler<'_>,
    ) -> String {
        let mut row = String::new();

        if format.show_borders {
            row.push('|');
        }

        for (idx, (cell, &width)) in data.iter().zip(widths.iter()).enumerate() {
            let alignment = format.columns.get(idx).map(|c| &c.alignment).unwrap_or(&Alignment::Left);
            let padded_cell = self.align_text(cell, width, alignment);

            if format.show_borders {
                row.push(' ');
            }
            row.push_str(&styler(row_idx, idx, &padded_cell));
            if format.show_borders {
                row.push_str(" |");
            } else {
                row.push_str("  ");
            }
        }

        row.trim_end().to_string()
    }

    /// Create horizontal border for table
    fn create_horizontal_border(&self, widths: &[usize]) -> String {
        let mut border = String::new();

        if !widths.is_empty() {
            border.push('+');
            for &width in widths {
                border.push_str(&"-".repeat(width + 2));
                border.push('+');
            }
        }

        border
    }

    /// Align text within specified width
    fn align_text(&self, text: &str, width: usize, alignment: &Alignment) -> String {
        let len = text_width(text);
        if len >= width {
            return text.chars().take(width).collect();
        }

        let padding = width - len;
        match alignment {
            Alignment::Left => format!("{}{}", text, " ".repeat(padding)),
            Alignment::Right => format!("{}{}", " ".repeat(padding), text),
            Alignment::Center => {
                let left_pad = padding / 2;
                let right_pad = padding - left_pad;
                format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(right_pad))
            }
        }
    }

    /// Table layout and rows for the comparison section.
    ///
    /// Columns: dataset, one per algorithm, fastest algorithm.
    pub(crate) fn comparison_rows(&self, report: &Report) -> (TableFormat, Vec<RowData>) {
        let mut columns = vec![Column::new("Dataset", Alignment::Left, 10, 30)];
        for algorithm in &report.algorithms {
            columns.push(Column::new(algorithm.clone(), Alignment::Right, 12, 32));
        }
        columns.push(Column::new("Fastest", Alignment::Center, 10, 30));

        let rows = report
            .comparison
            .iter()
            .map(|row| {
                let title = report
                    .section(&row.dataset)
                    .map(|s| s.title.clone())
                    .unwrap_or_else(|| row.dataset.clone());
                let factors = row.slowdown_factors();

                let mut cells = vec![title];
                for (i, duration) in row.durations.iter().enumerate() {
                    let mut cell = report.label(duration.ms);
                    if self.options.verbose_mode {
                        if let Some((_, factor)) = factors.get(i) {
                            let _ = write!(cell, " (x{:.2})", factor);
                        }
                    }
                    cells.push(cell);
                }
                cells.push(
                    report
                        .fastest
                        .get(&row.dataset)
                        .map(|f| f.algorithm.clone())
                        .unwrap_or_else(|| "-".to_string()),
                );
                cells
            })
            .collect();

        let format = TableFormat {
            columns,
            show_borders: self.options.table_borders,
            show_header: true,
            min_column_width: 8,
            max_column_width: 40,
        };
        (format, rows)
    }

    /// Histogram bar chart lines: `size | bar count`
    pub(crate) fn histogram_lines(&self, section: &DatasetSection, bar_char: char) -> Vec<(String, String, String)> {
        let peak = section.histogram_peak();
        let size_width = section
            .histogram
            .iter()
            .map(|bin| bin.size.to_string().len())
            .max()
            .unwrap_or(1);

        section
            .histogram
            .iter()
            .map(|bin| {
                let length = bar_length(bin.count, peak, self.options.chart_width);
                (
                    format!("{:>width$}", bin.size, width = size_width),
                    bar_char.to_string().repeat(length),
                    format_count(bin.count),
                )
            })
            .collect()
    }
}

/// Display width, counted in chars
fn text_width(text: &str) -> usize {
    text.chars().count()
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "=".repeat(text_width(title) + 4);

        writeln!(output, "{}", border)?;
        writeln!(output, "  {}  ", title)?;
        write!(output, "{}", border)?;

        Ok(output)
    }

    fn format_dataset_summary(&self, section: &DatasetSection) -> Result<String> {
        let mut output = String::new();
        let heading = format!("{} Dataset", section.title);

        writeln!(output, "{}", heading)?;
        writeln!(output, "{}", "-".repeat(text_width(&heading)))?;

        match section.total_cliques {
            Some(total) => writeln!(output, "Total cliques: {}", format_count(total))?,
            None => writeln!(output, "Total cliques: N/A")?,
        }

        if section.runs.is_empty() {
            write!(output, "Time taken:    no recorded runs")?;
        } else {
            writeln!(output, "Time taken:")?;
            let name_width = section.runs.iter().map(|r| text_width(&r.algorithm)).max().unwrap_or(0);
            let lines: Vec<String> = section
                .runs
                .iter()
                .map(|run| {
                    if self.options.verbose_mode {
                        format!("  {:<width$}  {}  ({})", run.algorithm, run.label, run.recorded, width = name_width)
                    } else {
                        format!("  {:<width$}  {}", run.algorithm, run.label, width = name_width)
                    }
                })
                .collect();
            write!(output, "{}", lines.join("\n"))?;
        }

        Ok(output)
    }

    fn format_histogram(&self, section: &DatasetSection, _index: usize) -> Result<String> {
        let mut output = String::new();

        if !section.has_histogram() {
            write!(output, "Clique size distribution: not recorded")?;
            return Ok(output);
        }

        writeln!(output, "Clique size distribution (size | count):")?;
        let lines: Vec<String> = self
            .histogram_lines(section, '#')
            .into_iter()
            .map(|(size, bar, count)| format!("  {} | {} {}", size, bar, count))
            .collect();
        write!(output, "{}", lines.join("\n"))?;

        Ok(output)
    }

    fn format_comparison_table(&self, report: &Report) -> Result<String> {
        if report.comparison.is_empty() {
            return Ok("No datasets selected.".to_string());
        }

        let mut output = String::new();
        writeln!(output, "Run Time Comparison:")?;
        writeln!(output, "--------------------")?;

        let (format, rows) = self.comparison_rows(report);
        output.push_str(&self.create_table(&format, &rows)?);

        Ok(output)
    }

    fn format_fastest(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Fastest Algorithm per Dataset:")?;
        write!(output, "------------------------------")?;

        if report.fastest.is_empty() {
            write!(output, "\nNo recorded runs.")?;
        }

        for (dataset, fastest) in report.fastest.iter() {
            let title = report.section(dataset).map(|s| s.title.as_str()).unwrap_or(dataset);
            write!(output, "\n• {}: {} ({})", title, fastest.algorithm, report.label(fastest.ms))?;
        }

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("ERROR: {}", error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("WARNING: {}", warning))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("SUCCESS: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BenchmarkData;
    use crate::report::{ReportBuilder, ReportOptions};

    fn plain(verbose: bool) -> PlainFormatter {
        PlainFormatter::new(FormattingOptions {
            enable_color: false,
            verbose_mode: verbose,
            table_borders: true,
            chart_width: 20,
        })
    }

    fn builtin_report() -> Report {
        ReportBuilder::build(&BenchmarkData::builtin(), &ReportOptions::default()).unwrap()
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(226_859), "226,859");
        assert_eq!(format_count(37_322_355), "37,322,355");
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_length(100, 100, 20), 20);
        assert_eq!(bar_length(50, 100, 20), 10);
        assert_eq!(bar_length(1, 100_000, 20), 1);
        assert_eq!(bar_length(0, 100, 20), 0);
        assert_eq!(bar_length(5, 0, 20), 0);
    }

    #[test]
    fn test_header() {
        let header = plain(false).format_header("Results").unwrap();
        assert_eq!(header, "===========\n  Results  \n===========");
    }

    #[test]
    fn test_dataset_summary() {
        let report = builtin_report();
        let text = plain(false).format_dataset_summary(&report.datasets[0]).unwrap();
        assert!(text.starts_with("Email-Enron Dataset\n"));
        assert!(text.contains("Total cliques: 226,859"));
        assert!(text.contains(&format!("  {:<15}  0m 52s 187ms", "Tomita")));
        assert!(!text.contains("00:00:52:187"));

        let verbose = plain(true).format_dataset_summary(&report.datasets[0]).unwrap();
        assert!(verbose.contains("(00:00:52:187)"));
    }

    #[test]
    fn test_histogram_chart() {
        let report = builtin_report();
        let text = plain(false).format_histogram(&report.datasets[0], 0).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 20);
        // size 7 is the peak bin and gets the full width
        assert!(lines.iter().any(|l| *l == format!("   7 | {} 25,896", "#".repeat(20))));
        assert!(lines.last().unwrap().ends_with("| # 6"));
    }

    #[test]
    fn test_histogram_not_recorded() {
        let report = builtin_report();
        let text = plain(false).format_histogram(&report.datasets[2], 2).unwrap();
        assert_eq!(text, "Clique size distribution: not recorded");
    }

    #[test]
    fn test_comparison_table() {
        let report = builtin_report();
        let text = plain(false).format_comparison_table(&report).unwrap();
        assert!(text.contains("| Dataset"));
        assert!(text.contains("Chiba-Nishizeki"));
        assert!(text.contains("0m 52s 187ms"));
        assert!(!text.contains("(x"));

        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("| ")).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[1].starts_with("| Email-Enron"));
        assert!(rows[3].starts_with("| as-Skitter"));
        assert!(rows[3].contains("ELS"));

        let verbose = plain(true).format_comparison_table(&report).unwrap();
        assert!(verbose.contains("(x1.00)"));
    }

    #[test]
    fn test_fastest_section() {
        let report = builtin_report();
        let text = plain(false).format_fastest(&report).unwrap();
        assert!(text.contains("• Email-Enron: Tomita (0m 52s 187ms)"));
        assert!(text.contains("• Wiki-Vote: Tomita (0m 40s 228ms)"));
        assert!(text.contains("• as-Skitter: ELS (6m 14s 392ms)"));
    }

    #[test]
    fn test_table_alignment() {
        let formatter = plain(false);
        assert_eq!(formatter.align_text("ab", 6, &Alignment::Left), "ab    ");
        assert_eq!(formatter.align_text("ab", 6, &Alignment::Right), "    ab");
        assert_eq!(formatter.align_text("ab", 6, &Alignment::Center), "  ab  ");
        assert_eq!(formatter.align_text("abcdef", 3, &Alignment::Left), "abc");
    }

    #[test]
    fn test_messages() {
        let formatter = plain(false);
        assert_eq!(formatter.format_warning("w").unwrap(), "WARNING: w");
        assert_eq!(formatter.format_error("e").unwrap(), "ERROR: e");
        assert_eq!(formatter.format_success("s").unwrap(), "SUCCESS: s");
    }
}
