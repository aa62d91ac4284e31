//! Colored formatter implementation with terminal color support
//!
//! Uses the plain formatter's table and chart layout and adds ANSI colors
//! on top: histogram bars in per-dataset chart colors, comparison cells
//! shaded by how far they are from the fastest run.

use crate::{
    error::Result,
    report::{DatasetSection, Report},
};
use super::formatter::{format_count, OutputFormatter, FormattingOptions, PlainFormatter};
use colored::*;
use std::fmt::Write as _;

/// Bar colors, cycled per dataset in report order
const CHART_PALETTE: [(u8, u8, u8); 4] = [
    (0x88, 0x84, 0xd8),
    (0x82, 0xca, 0x9d),
    (0xff, 0xc6, 0x58),
    (0xff, 0x80, 0x42),
];

/// How a run compares to the fastest run on the same dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedLevel {
    Fastest,   // x1.00
    Close,     // up to x1.50
    Slow,      // up to x3.00
    VerySlow,  // beyond
}

impl SpeedLevel {
    /// Classify from a slowdown factor relative to the fastest run
    pub fn from_factor(factor: f64) -> Self {
        if factor <= 1.0 {
            Self::Fastest
        } else if factor <= 1.5 {
            Self::Close
        } else if factor <= 3.0 {
            Self::Slow
        } else {
            Self::VerySlow
        }
    }

    /// Get color for this speed level
    pub fn color(&self) -> Color {
        match self {
            Self::Fastest => Color::Green,
            Self::Close => Color::Cyan,
            Self::Slow => Color::Yellow,
            Self::VerySlow => Color::Red,
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub highlight: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            highlight: Color::Magenta,
            muted: Color::BrightBlack,
            border: Color::BrightBlack,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    plain_formatter: PlainFormatter,
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self::with_color_scheme(options, ColorScheme::default())
    }

    /// Create a colored formatter with custom color scheme
    pub fn with_color_scheme(options: FormattingOptions, color_scheme: ColorScheme) -> Self {
        let plain_formatter = PlainFormatter::new(options.clone());
        Self {
            plain_formatter,
            options,
            color_scheme,
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Apply bold formatting if colors are enabled
    fn bold(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold()
        } else {
            text.normal()
        }
    }

    /// Apply dimmed formatting if colors are enabled
    fn dimmed(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.dimmed()
        } else {
            text.normal()
        }
    }

    /// Create a colored section header
    fn create_section_header(&self, title: &str, icon: &str) -> String {
        if self.options.enable_color {
            format!("{} {}", icon, title.bold().color(self.color_scheme.header))
        } else {
            format!("{} {}", icon, title)
        }
    }

    /// Chart color for the dataset at `index` in report order
    fn chart_color(index: usize) -> Color {
        let (r, g, b) = CHART_PALETTE[index % CHART_PALETTE.len()];
        Color::TrueColor { r, g, b }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();

        let decorated_title = format!("◆ {}", title);
        let border = "═".repeat(decorated_title.chars().count() + 4);

        writeln!(output, "{}", self.colorize(&border, self.color_scheme.border))?;
        writeln!(output, "  {}  ", self.bold(&decorated_title).color(self.color_scheme.header))?;
        write!(output, "{}", self.colorize(&border, self.color_scheme.border))?;

        Ok(output)
    }

    fn format_dataset_summary(&self, section: &DatasetSection) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}", self.create_section_header(&format!("{} Dataset", section.title), "▸"))?;

        let total = section
            .total_cliques
            .map(format_count)
            .unwrap_or_else(|| "N/A".to_string());
        writeln!(output, "  Total cliques: {}", self.bold(&total).color(self.color_scheme.info))?;

        if section.runs.is_empty() {
            write!(output, "  Time taken:    {}", self.dimmed("no recorded runs"))?;
            return Ok(output);
        }

        writeln!(output, "  Time taken:")?;
        let fastest = section.runs.iter().map(|r| r.ms).min();
        let name_width = section.runs.iter().map(|r| r.algorithm.chars().count()).max().unwrap_or(0);
        let lines: Vec<String> = section
            .runs
            .iter()
            .map(|run| {
                let name = format!("{:<width$}", run.algorithm, width = name_width);
                let label = if Some(run.ms) == fastest {
                    self.bold(&run.label).color(self.color_scheme.success).to_string()
                } else {
                    run.label.clone()
                };
                if self.options.verbose_mode {
                    format!("    {}  {}  {}", name, label, self.dimmed(&format!("({})", run.recorded)))
                } else {
                    format!("    {}  {}", name, label)
                }
            })
            .collect();
        write!(output, "{}", lines.join("\n"))?;

        Ok(output)
    }

    fn format_histogram(&self, section: &DatasetSection, index: usize) -> Result<String> {
        let mut output = String::new();

        if !section.has_histogram() {
            write!(output, "  {}", self.dimmed("Clique size distribution: not recorded"))?;
            return Ok(output);
        }

        writeln!(output, "  {}", self.dimmed("Clique size distribution (size │ count):"))?;

        let color = Self::chart_color(index);
        let lines: Vec<String> = self
            .plain_formatter
            .histogram_lines(section, '█')
            .into_iter()
            .map(|(size, bar, count)| {
                format!("  {} │ {} {}", size, self.colorize(&bar, color), self.dimmed(&count))
            })
            .collect();
        write!(output, "{}", lines.join("\n"))?;

        Ok(output)
    }

    fn format_comparison_table(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}", self.create_section_header("Run Time Comparison", "⏱"))?;

        if report.comparison.is_empty() {
            write!(output, "{}", self.colorize("No datasets selected.", self.color_scheme.muted))?;
            return Ok(output);
        }

        let (format, rows) = self.plain_formatter.comparison_rows(report);
        let algorithm_columns = report.algorithms.len();

        // Speed levels per data row, aligned with algorithm columns 1..=n
        let levels: Vec<Vec<SpeedLevel>> = report
            .comparison
            .iter()
            .map(|row| {
                row.slowdown_factors()
                    .into_iter()
                    .map(|(_, factor)| SpeedLevel::from_factor(factor))
                    .collect()
            })
            .collect();

        let styler = |row_idx: Option<usize>, col_idx: usize, cell: &str| -> String {
            match row_idx {
                None => self.bold(cell).to_string(),
                Some(r) if col_idx >= 1 && col_idx <= algorithm_columns => {
                    match levels.get(r).and_then(|row| row.get(col_idx - 1)) {
                        Some(level) => self.colorize(cell, level.color()).to_string(),
                        None => cell.to_string(),
                    }
                }
                Some(_) if col_idx == algorithm_columns + 1 => {
                    self.colorize(cell, self.color_scheme.highlight).to_string()
                }
                Some(_) => cell.to_string(),
            }
        };

        output.push_str(&self.plain_formatter.create_styled_table(&format, &rows, &styler)?);

        Ok(output)
    }

    fn format_fastest(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        write!(output, "{}", self.create_section_header("Fastest Algorithm per Dataset", "★"))?;

        if report.fastest.is_empty() {
            write!(output, "\n  {}", self.dimmed("No recorded runs."))?;
        }

        for (dataset, fastest) in report.fastest.iter() {
            let title = report.section(dataset).map(|s| s.title.as_str()).unwrap_or(dataset);
            write!(
                output,
                "\n  {} {}: {} ({})",
                self.colorize("✓", self.color_scheme.success),
                title,
                self.bold(&fastest.algorithm).color(self.color_scheme.highlight),
                report.label(fastest.ms)
            )?;
        }

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("✗ {}", self.colorize(error, self.color_scheme.error)))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("⚠ {}", self.colorize(warning, self.color_scheme.warning)))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("✓ {}", self.colorize(message, self.color_scheme.success)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BenchmarkData;
    use crate::report::{ReportBuilder, ReportOptions};

    fn formatter(enable_color: bool) -> ColoredFormatter {
        ColoredFormatter::new(FormattingOptions {
            enable_color,
            verbose_mode: false,
            table_borders: true,
            chart_width: 10,
        })
    }

    fn builtin_report() -> Report {
        ReportBuilder::build(&BenchmarkData::builtin(), &ReportOptions::default()).unwrap()
    }

    #[test]
    fn test_speed_levels() {
        assert_eq!(SpeedLevel::from_factor(1.0), SpeedLevel::Fastest);
        assert_eq!(SpeedLevel::from_factor(1.25), SpeedLevel::Close);
        assert_eq!(SpeedLevel::from_factor(2.0), SpeedLevel::Slow);
        assert_eq!(SpeedLevel::from_factor(f64::INFINITY), SpeedLevel::VerySlow);
        assert_eq!(SpeedLevel::Fastest.color(), Color::Green);
    }

    #[test]
    fn test_header_without_color() {
        let header = formatter(false).format_header("Results").unwrap();
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  ◆ Results  ");
        assert_eq!(lines[0].chars().count(), "◆ Results".chars().count() + 4);
    }

    #[test]
    fn test_histogram_uses_block_bars() {
        let report = builtin_report();
        let text = formatter(false).format_histogram(&report.datasets[1], 1).unwrap();
        assert!(text.contains(&format!("   7 │ {} 83,266", "█".repeat(10))));
        assert_eq!(text.lines().count(), 17);
    }

    #[test]
    fn test_comparison_table_content() {
        let report = builtin_report();
        let text = formatter(false).format_comparison_table(&report).unwrap();
        assert!(text.contains("Run Time Comparison"));
        assert!(text.contains("Wiki-Vote"));
        assert!(text.contains("0m 40s 228ms"));
    }

    #[test]
    fn test_colored_output_keeps_content() {
        let report = builtin_report();
        let colored = formatter(true);
        let summary = colored.format_dataset_summary(&report.datasets[0]).unwrap();
        assert!(summary.contains("226,859"));
        assert!(summary.contains("0m 52s 187ms"));

        let fastest = colored.format_fastest(&report).unwrap();
        assert!(fastest.contains("Email-Enron"));
        assert!(fastest.contains("Tomita"));
    }

    #[test]
    fn test_chart_colors_cycle() {
        assert_eq!(ColoredFormatter::chart_color(1), ColoredFormatter::chart_color(1 + CHART_PALETTE.len()));
        assert!(matches!(ColoredFormatter::chart_color(0), Color::TrueColor { r: 0x88, g: 0x84, b: 0xd8 }));
    }

    #[test]
    fn test_messages_without_color() {
        let formatter = formatter(false);
        assert_eq!(formatter.format_warning("careful").unwrap(), "⚠ careful");
        assert_eq!(formatter.format_success("done").unwrap(), "✓ done");
        assert_eq!(formatter.format_error("broken").unwrap(), "✗ broken");
    }
}
