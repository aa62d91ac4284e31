//! Command-line help system with examples and detailed guidance
//!
//! This module provides detailed help text, usage examples and topic pages
//! for the data file format and the output modes.

use crate::config::env::EnvManager;
use colored::*;

const BUILD_TIME: &str = match option_env!("BUILD_TIME") {
    Some(time) => time,
    None => "unknown",
};

/// Help system for the CLI application
pub struct HelpSystem {
    platform: String,
}

impl HelpSystem {
    /// Create a new help system
    pub fn new() -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
        }
    }

    /// Topic names accepted by `--help-topic`
    pub fn topics() -> &'static [&'static str] {
        &["data", "output", "env", "examples"]
    }

    /// Display the main help message with all available options
    pub fn display_main_help(&self, use_colors: bool) -> String {
        let mut help = String::new();

        help.push_str(&self.format_header(use_colors));
        help.push('\n');
        help.push_str(&self.format_usage_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_options_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_examples_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_environment_section(use_colors));

        help
    }

    /// Display quick help for specific topics
    pub fn display_topic_help(&self, topic: &str, use_colors: bool) -> Option<String> {
        match topic.to_lowercase().as_str() {
            "data" | "data-file" => Some(self.format_data_help(use_colors)),
            "output" | "formatting" => Some(self.format_output_help(use_colors)),
            "env" | "environment" => Some(self.format_env_help(use_colors)),
            "examples" => Some(self.format_examples_section(use_colors)),
            _ => None,
        }
    }

    fn section_header(title: &str, use_colors: bool) -> String {
        if use_colors {
            title.bright_green().bold().to_string()
        } else {
            title.to_string()
        }
    }

    fn format_header(&self, use_colors: bool) -> String {
        let title = "Clique Report";
        let subtitle = "Maximal clique enumeration benchmark results for the terminal";
        let version = match option_env!("GIT_COMMIT") {
            Some(commit) => format!("{} ({})", env!("CARGO_PKG_VERSION"), commit),
            None => env!("CARGO_PKG_VERSION").to_string(),
        };

        if use_colors {
            format!(
                "{}\n{}\nVersion: {} | Built: {} | Platform: {}\n",
                title.bright_cyan().bold(),
                subtitle.bright_blue(),
                version.green(),
                BUILD_TIME,
                self.platform.yellow()
            )
        } else {
            format!(
                "{}\n{}\nVersion: {} | Built: {} | Platform: {}\n",
                title, subtitle, version, BUILD_TIME, self.platform
            )
        }
    }

    fn format_usage_section(&self, use_colors: bool) -> String {
        let usage_patterns = [
            "clique-report [OPTIONS]",
            "clique-report --data <PATH> [OPTIONS]",
            "clique-report --help-topic <TOPIC>",
        ];

        let mut usage = format!("{}\n", Self::section_header("USAGE:", use_colors));
        for pattern in usage_patterns {
            if use_colors {
                usage.push_str(&format!("  {}\n", pattern.bright_white()));
            } else {
                usage.push_str(&format!("  {}\n", pattern));
            }
        }

        usage
    }

    fn format_options_section(&self, use_colors: bool) -> String {
        let options = [
            OptionHelp {
                short: Some("d"),
                long: "data",
                value: "<PATH>",
                description: "JSON benchmark data file (default: embedded results)",
                example: Some("--data results/mce.json"),
            },
            OptionHelp {
                short: None,
                long: "format",
                value: "<FORMAT>",
                description: "Output format: table or json",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "dataset",
                value: "<KEY>",
                description: "Dataset to include (can be used multiple times)",
                example: Some("--dataset enron --dataset wiki-vote"),
            },
            OptionHelp {
                short: None,
                long: "show-hours",
                value: "",
                description: "Keep whole hours in run time labels",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "chart-width",
                value: "<COLUMNS>",
                description: "Width of the longest histogram bar (1-200)",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "color / --no-color",
                value: "",
                description: "Force or disable colored output",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "verbose",
                value: "",
                description: "Show slowdown factors and progress logs",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "debug",
                value: "",
                description: "Structured JSON debug logs on stderr",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "help-topic",
                value: "<TOPIC>",
                description: "Detailed help: data, output, env, examples",
                example: None,
            },
        ];

        let mut output = format!("{}\n", Self::section_header("OPTIONS:", use_colors));
        for option in options {
            output.push_str(&option.format(use_colors));
            output.push('\n');
        }

        output
    }

    fn format_env_help(&self, use_colors: bool) -> String {
        let mut output = format!("{}\n\n", Self::section_header("ENVIRONMENT CONFIGURATION", use_colors));
        output.push_str(&EnvManager::display_env_help());
        output.push_str("\nA .env file in the working directory is read at startup. Example:\n\n");
        output.push_str(&EnvManager::create_example_env_content());
        output
    }

    fn format_examples_section(&self, use_colors: bool) -> String {
        let examples = [
            ExampleHelp {
                title: "Full report",
                command: "clique-report",
                description: "Histograms, run times and fastest algorithm for every dataset",
            },
            ExampleHelp {
                title: "Single dataset",
                command: "clique-report --dataset enron",
                description: "Only the Email-Enron results",
            },
            ExampleHelp {
                title: "Machine-readable output",
                command: "clique-report --format json > report.json",
                description: "Report data as pretty-printed JSON",
            },
            ExampleHelp {
                title: "Your own measurements",
                command: "clique-report --data runs.json --show-hours",
                description: "Load results from a file and keep whole hours in run times",
            },
            ExampleHelp {
                title: "Plain text for logs",
                command: "clique-report --no-color --chart-width 30",
                description: "No color codes and narrower bar charts",
            },
        ];

        let mut output = format!("{}\n", Self::section_header("EXAMPLES:", use_colors));
        for example in examples {
            output.push_str(&example.format(use_colors));
            output.push('\n');
        }

        output
    }

    fn format_environment_section(&self, use_colors: bool) -> String {
        let mut output = format!("{}\n", Self::section_header("ENVIRONMENT VARIABLES:", use_colors));
        output.push_str("Configuration priority: CLI arguments > Environment variables > .env file > Defaults\n\n");

        for (var_name, description, _example) in EnvManager::get_supported_env_vars() {
            if use_colors {
                output.push_str(&format!("  {}: {}\n", var_name.bright_yellow().bold(), description.white()));
            } else {
                output.push_str(&format!("  {}: {}\n", var_name, description));
            }
        }

        output
    }

    fn format_data_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", Self::section_header("DATA FILE FORMAT:", use_colors));

        help.push_str("A JSON document with the datasets and one entry per algorithm:\n\n");
        help.push_str(r#"  {
    "datasets": [
      { "key": "enron", "title": "Email-Enron",
        "histogram": [ { "size": 2, "count": 14070 } ] }
    ],
    "algorithms": [
      { "name": "Tomita",
        "runs": { "enron": { "clique_count": 226859,
                             "duration": "00:00:52:187" } } }
    ]
  }
"#);

        help.push_str("\nRUN TIMES:\n");
        help.push_str("- Written as HH:MM:SS:mmm, four fields separated by ':'\n");
        help.push_str("- Every field must be digits only; hours may exceed 24\n");
        help.push_str("- A malformed run time is an error, never read as zero\n");

        help.push_str("\nRULES:\n");
        help.push_str("- Dataset keys and algorithm names must be unique\n");
        help.push_str("- Every algorithm needs a run for each reported dataset\n");
        help.push_str("- The histogram is optional and lists clique size / count pairs\n");

        help
    }

    fn format_output_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", Self::section_header("OUTPUT FORMATTING REFERENCE:", use_colors));

        help.push_str("OUTPUT MODES:\n");
        help.push_str("- Default: colored tables and bar charts\n");
        help.push_str("- --no-color: plain text for scripts and logs\n");
        help.push_str("- --format json: report data for other tools\n");
        help.push_str("- --verbose: slowdown factor next to every run time\n\n");

        help.push_str("RUN TIME LABELS:\n");
        help.push_str("- Default: \"{m}m {s}s {ms}ms\" with minutes taken modulo 60\n");
        help.push_str("- --show-hours: \"{h}h {m}m {s}s {ms}ms\" for runs of an hour or more\n\n");

        help.push_str("COMPARISON COLORS:\n");
        if use_colors {
            help.push_str(&format!("- {}: fastest algorithm on the dataset\n", "Green".green()));
            help.push_str(&format!("- {}: within 1.5x of the fastest\n", "Cyan".cyan()));
            help.push_str(&format!("- {}: within 3x of the fastest\n", "Yellow".yellow()));
            help.push_str(&format!("- {}: slower than that\n", "Red".red()));
        } else {
            help.push_str("- Green: fastest algorithm on the dataset\n");
            help.push_str("- Cyan: within 1.5x of the fastest\n");
            help.push_str("- Yellow: within 3x of the fastest\n");
            help.push_str("- Red: slower than that\n");
        }

        help
    }
}

impl Default for HelpSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for formatting individual options
struct OptionHelp {
    short: Option<&'static str>,
    long: &'static str,
    value: &'static str,
    description: &'static str,
    example: Option<&'static str>,
}

impl OptionHelp {
    fn format(&self, use_colors: bool) -> String {
        let mut option_str = String::new();

        if let Some(short) = self.short {
            if use_colors {
                option_str.push_str(&format!("  {}, ", format!("-{}", short).bright_cyan()));
            } else {
                option_str.push_str(&format!("  -{}, ", short));
            }
        } else {
            option_str.push_str("      ");
        }

        let long_with_value = if self.value.is_empty() {
            format!("--{}", self.long)
        } else {
            format!("--{} {}", self.long, self.value)
        };

        if use_colors {
            option_str.push_str(&format!("{:<30} {}",
                long_with_value.bright_cyan(),
                self.description.white()
            ));
        } else {
            option_str.push_str(&format!("{:<30} {}", long_with_value, self.description));
        }

        if let Some(example) = self.example {
            if use_colors {
                option_str.push_str(&format!("\n{}{}", " ".repeat(36),
                    format!("Example: {}", example).bright_blue().italic()
                ));
            } else {
                option_str.push_str(&format!("\n{}Example: {}", " ".repeat(36), example));
            }
        }

        option_str
    }
}

/// Helper struct for formatting examples
struct ExampleHelp {
    title: &'static str,
    command: &'static str,
    description: &'static str,
}

impl ExampleHelp {
    fn format(&self, use_colors: bool) -> String {
        if use_colors {
            format!("  {}:\n    {}\n    {}\n",
                self.title.bright_yellow().bold(),
                self.command.bright_white(),
                self.description.bright_blue().italic()
            )
        } else {
            format!("  {}:\n    {}\n    {}\n",
                self.title, self.command, self.description
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_help_display() {
        let help = HelpSystem::new().display_main_help(false);
        assert!(help.contains("Clique Report"));
        assert!(help.contains("USAGE:"));
        assert!(help.contains("OPTIONS:"));
        assert!(help.contains("--dataset <KEY>"));
        assert!(help.contains("EXAMPLES:"));
        assert!(help.contains("CLIQUE_REPORT_DATA"));
        assert!(help.contains("SHOW_HOURS"));
    }

    #[test]
    fn test_topic_help() {
        let help_system = HelpSystem::new();
        for topic in HelpSystem::topics() {
            assert!(help_system.display_topic_help(topic, false).is_some(), "topic {}", topic);
        }
        assert!(help_system.display_topic_help("DATA", false).is_some());
        assert!(help_system.display_topic_help("storage", false).is_none());
    }

    #[test]
    fn test_data_help_describes_format() {
        let help = HelpSystem::new().display_topic_help("data", false).unwrap();
        assert!(help.contains("DATA FILE FORMAT"));
        assert!(help.contains("\"clique_count\": 226859"));
        assert!(help.contains("HH:MM:SS:mmm"));
    }

    #[test]
    fn test_output_help_mentions_show_hours() {
        let help = HelpSystem::new().display_topic_help("output", false).unwrap();
        assert!(help.contains("--show-hours"));
        assert!(help.contains("modulo 60"));
    }

    #[test]
    fn test_env_help_lists_variables() {
        let help = HelpSystem::new().display_topic_help("env", false).unwrap();
        assert!(help.starts_with("ENVIRONMENT CONFIGURATION"));
        assert!(help.contains("Configuration Priority"));
        assert!(help.contains("CHART_WIDTH="));
    }

    #[test]
    fn test_option_help_formatting() {
        let option = OptionHelp {
            short: Some("d"),
            long: "data",
            value: "<PATH>",
            description: "Data file",
            example: Some("--data x.json"),
        };
        let text = option.format(false);
        assert!(text.starts_with("  -d, --data <PATH>"));
        assert!(text.contains("Example: --data x.json"));
    }

    #[test]
    fn test_example_help_formatting() {
        let example = ExampleHelp {
            title: "Title",
            command: "clique-report",
            description: "Description",
        };
        assert_eq!(example.format(false), "  Title:\n    clique-report\n    Description\n");
    }
}
