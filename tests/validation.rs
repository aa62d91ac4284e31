//! Output validation tests for clique-report
//!
//! These tests check the shape of the rendered report: duration labels,
//! grouped counts, histogram bars and table borders, plus the JSON schema.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use regex::Regex;
use serde_json::Value;
use std::process::Command;

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    let mut cmd = Command::cargo_bin("clique-report").unwrap();
    for var in ["CLIQUE_REPORT_DATA", "OUTPUT_FORMAT", "ENABLE_COLOR", "SHOW_HOURS", "CHART_WIDTH", "DATASETS", "NO_COLOR", "FORCE_COLOR"] {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = create_test_cmd().args(args).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

/// Validation patterns for the text report
struct OutputPatterns {
    /// Run time label (e.g., "0m 52s 187ms")
    pub duration_pattern: Regex,
    /// Run time label with hours (e.g., "2h 0m 0s 0ms")
    pub extended_duration_pattern: Regex,
    /// Thousands-grouped count
    pub count_pattern: Regex,
    /// One histogram line: size, bar, count
    pub histogram_line_pattern: Regex,
    /// Table border line
    pub table_border_pattern: Regex,
    /// Fastest-algorithm bullet
    pub fastest_pattern: Regex,
    /// ANSI escape sequence
    pub ansi_pattern: Regex,
}

impl Default for OutputPatterns {
    fn default() -> Self {
        Self {
            duration_pattern: Regex::new(r"\b\d{1,2}m \d{1,2}s \d{1,3}ms\b").unwrap(),
            extended_duration_pattern: Regex::new(r"\b\d+h \d{1,2}m \d{1,2}s \d{1,3}ms\b").unwrap(),
            count_pattern: Regex::new(r"^\d{1,3}(,\d{3})*$").unwrap(),
            histogram_line_pattern: Regex::new(r"^  +\d+ \| #+ (\d{1,3}(,\d{3})*)$").unwrap(),
            table_border_pattern: Regex::new(r"^\+(-+\+)+$").unwrap(),
            fastest_pattern: Regex::new(r"^• .+: .+ \(\d+m \d+s \d+ms\)$").unwrap(),
            ansi_pattern: Regex::new(r"\x1b\[[0-9;]*m").unwrap(),
        }
    }
}

#[test]
fn test_report_section_order() {
    let stdout = stdout_of(&["--no-color"]);

    let positions: Vec<usize> = [
        "Maximal Clique Enumeration Results",
        "Email-Enron Dataset",
        "Wiki-Vote Dataset",
        "as-Skitter Dataset",
        "Run Time Comparison:",
        "Fastest Algorithm per Dataset:",
    ]
    .iter()
    .map(|needle| stdout.find(needle).unwrap_or_else(|| panic!("missing '{}'", needle)))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "sections out of order: {:?}", positions);
}

#[test]
fn test_duration_labels() {
    let patterns = OutputPatterns::default();
    let stdout = stdout_of(&["--no-color"]);

    // 3 algorithms x 3 datasets, each in a summary and the comparison, plus 3 winners
    assert_eq!(patterns.duration_pattern.find_iter(&stdout).count(), 21);
    assert!(!patterns.extended_duration_pattern.is_match(&stdout));
    assert!(!stdout.contains("00:00:52:187"));
}

#[test]
fn test_histogram_lines() {
    let patterns = OutputPatterns::default();
    let stdout = stdout_of(&["--no-color"]);

    let lines: Vec<&str> = stdout
        .lines()
        .filter(|line| patterns.histogram_line_pattern.is_match(line))
        .collect();

    // Email-Enron has 19 bins and Wiki-Vote 16; as-Skitter has none
    assert_eq!(lines.len(), 35);
    for line in &lines {
        let count = patterns.histogram_line_pattern.captures(line).unwrap().get(1).unwrap().as_str();
        assert!(patterns.count_pattern.is_match(count));
    }

    let longest = lines.iter().map(|l| l.matches('#').count()).max().unwrap();
    assert_eq!(longest, 50);
    assert!(stdout.contains("Clique size distribution: not recorded"));
}

#[test]
fn test_comparison_table_layout() {
    let patterns = OutputPatterns::default();
    let stdout = stdout_of(&["--no-color"]);

    let table: Vec<&str> = stdout
        .lines()
        .skip_while(|l| !l.starts_with("Run Time Comparison:"))
        .skip(2)
        .take_while(|l| !l.is_empty())
        .collect();

    assert_eq!(table.iter().filter(|l| patterns.table_border_pattern.is_match(l)).count(), 3);
    let header = table.iter().find(|l| l.contains("Dataset")).unwrap();
    for column in ["Tomita", "ELS", "Chiba-Nishizeki", "Fastest"] {
        assert!(header.contains(column), "header lacks {}", column);
    }

    let widths: Vec<usize> = table.iter().map(|l| l.chars().count()).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged table: {:?}", widths);
}

#[test]
fn test_fastest_bullets() {
    let patterns = OutputPatterns::default();
    let stdout = stdout_of(&["--no-color"]);

    let bullets: Vec<&str> = stdout.lines().filter(|l| l.starts_with("• ")).collect();
    assert_eq!(bullets.len(), 3);
    assert!(bullets.iter().all(|l| patterns.fastest_pattern.is_match(l)));
}

#[test]
fn test_color_switches() {
    let patterns = OutputPatterns::default();

    let plain = stdout_of(&["--no-color"]);
    assert!(!patterns.ansi_pattern.is_match(&plain));

    let colored = stdout_of(&["--color"]);
    assert!(patterns.ansi_pattern.is_match(&colored));
    let stripped = patterns.ansi_pattern.replace_all(&colored, "");
    assert!(stripped.contains("Email-Enron Dataset"));
    assert!(stripped.contains("Total cliques: 226,859"));
}

#[test]
fn test_json_schema() {
    let stdout = stdout_of(&["--format", "json", "--color"]);
    assert!(!OutputPatterns::default().ansi_pattern.is_match(&stdout));

    let json: Value = serde_json::from_str(&stdout).unwrap();
    for key in ["generated_at", "duration_style", "algorithms", "datasets", "comparison", "fastest"] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(json["duration_style"], "compatible");

    let enron = &json["datasets"][0];
    assert_eq!(enron["key"], "enron");
    assert_eq!(enron["title"], "Email-Enron");
    assert_eq!(enron["total_cliques"], 226859);
    assert_eq!(enron["histogram"][0]["size"], 2);
    assert_eq!(enron["histogram"][0]["count"], 14070);
    assert_eq!(enron["runs"][0]["recorded"], "00:00:52:187");
    assert_eq!(enron["runs"][0]["label"], "0m 52s 187ms");

    assert!(json["datasets"][2]["histogram"].as_array().unwrap().is_empty());
    assert_eq!(json["fastest"]["as-skitter"]["algorithm"], "ELS");
    assert_eq!(json["fastest"]["as-skitter"]["ms"], 374392);
}

#[test]
fn test_json_respects_show_hours() {
    let stdout = stdout_of(&["--format", "json", "--show-hours", "--dataset", "as-skitter"]);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["duration_style"], "extended");
    assert_eq!(json["datasets"].as_array().unwrap().len(), 1);
    assert_eq!(json["comparison"][0]["durations"][2]["ms"], 1431077);
}

#[test]
fn test_errors_stay_off_stdout() {
    create_test_cmd()
        .args(["--no-color", "--dataset", "missing"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("[VALIDATION]"));
}
