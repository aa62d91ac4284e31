//! Command-line interface module with comprehensive help system

pub mod help;

pub use help::HelpSystem;

use crate::models::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Clique Report - Maximal clique enumeration benchmark results in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "clique-report")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON benchmark data file (defaults to the embedded results)
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Keep whole hours in run time labels (e.g. "1h 2m 3s 4ms")
    #[arg(long)]
    pub show_hours: bool,

    /// Width of the longest histogram bar, in characters
    #[arg(long, value_name = "COLUMNS", value_parser = parse_chart_width)]
    pub chart_width: Option<usize>,

    /// Dataset to include (can be used multiple times)
    #[arg(long = "dataset", value_name = "KEY", action = ArgAction::Append)]
    pub datasets: Vec<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Show help for specific topic (data, output, env, examples)
    #[arg(long, value_name = "TOPIC")]
    pub help_topic: Option<String>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if let Some(blank) = self.datasets.iter().find(|d| d.trim().is_empty()) {
            return Err(format!("Invalid dataset key '{}': must not be blank", blank));
        }

        Ok(())
    }

    /// Check if help should be displayed for a specific topic
    pub fn should_show_topic_help(&self) -> bool {
        self.help_topic.is_some()
    }

    /// Get the help topic if specified
    pub fn get_help_topic(&self) -> Option<&str> {
        self.help_topic.as_deref()
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            supports_color()
        }
    }

    /// Display help for the specified topic or main help
    pub fn display_help(&self) -> String {
        let help_system = HelpSystem::new();
        let use_colors = self.use_colors();

        if let Some(topic) = &self.help_topic {
            help_system.display_topic_help(topic, use_colors)
                .unwrap_or_else(|| {
                    format!("Unknown help topic: '{}'\n\nAvailable topics: {}\n\n{}",
                        topic, HelpSystem::topics().join(", "), help_system.display_main_help(use_colors))
                })
        } else {
            help_system.display_main_help(use_colors)
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Configuration Summary:\n");
        match self.data {
            Some(ref path) => summary.push_str(&format!("  Data file: {}\n", path.display())),
            None => summary.push_str("  Data file: (embedded results)\n"),
        }
        if let Some(format) = self.format {
            summary.push_str(&format!("  Output format: {:?}\n", format));
        }
        summary.push_str(&format!("  Colored output: {}\n", self.use_colors()));
        summary.push_str(&format!("  Show hours: {}\n", self.show_hours));
        if let Some(width) = self.chart_width {
            summary.push_str(&format!("  Chart width: {}\n", width));
        }
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        if !self.datasets.is_empty() {
            summary.push_str(&format!("  Datasets: {}\n", self.datasets.join(", ")));
        }

        summary
    }
}

/// Parse a chart width in columns
fn parse_chart_width(s: &str) -> Result<usize, String> {
    if s.starts_with('+') {
        return Err(format!("Invalid chart width: {}", s));
    }

    s.parse::<usize>()
        .map_err(|_| format!("Invalid chart width: {}", s))
        .and_then(|width| {
            if width == 0 {
                Err("Chart width must be greater than 0".to_string())
            } else if width > crate::defaults::MAX_CHART_WIDTH {
                Err(format!("Chart width cannot exceed {}", crate::defaults::MAX_CHART_WIDTH))
            } else {
                Ok(width)
            }
        })
}

/// Check if the terminal supports color output
pub(crate) fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
