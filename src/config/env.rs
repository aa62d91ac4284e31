//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use crate::models::OutputFormat;
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        Self::load_env_file_from(Path::new(".env"), debug).map(|_| ())
    }

    /// Load a specific env file; returns whether it existed
    pub fn load_env_file_from(path: &Path, debug: bool) -> Result<bool> {
        if !path.exists() {
            if debug {
                eprintln!("No {} file found, using defaults and CLI arguments", path.display());
            }
            return Ok(false);
        }

        dotenv::from_path(path)
            .map_err(|e| AppError::config(format!("Failed to load {} file: {}", path.display(), e)))?;

        if debug {
            eprintln!("Loaded configuration from {}", path.display());
        }
        Ok(true)
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Clique Report Configuration
#
# Values specified here are used as defaults and can be overridden by
# environment variables and command-line arguments.

# JSON benchmark data file (the embedded results are used when unset)
# CLIQUE_REPORT_DATA=results/mce.json

# Output format: table or json
# OUTPUT_FORMAT=table

# Enable colored output (true/false)
# ENABLE_COLOR=true

# Keep whole hours in run time labels (true/false)
# SHOW_HOURS=false

# Width of the longest histogram bar (1-200)
# CHART_WIDTH=50

# Datasets to include (comma-separated keys, empty means all)
# DATASETS=enron,wiki-vote
"#.to_string()
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            crate::defaults::DATA_FILE_ENV => {
                if value.trim().is_empty() {
                    return Err(AppError::config(format!("{} must not be empty", key)));
                }
            }
            "OUTPUT_FORMAT" => {
                value.parse::<OutputFormat>()?;
            }
            "ENABLE_COLOR" | "SHOW_HOURS" => {
                value.trim().parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", key, value, e)))?;
            }
            "CHART_WIDTH" => {
                let width: usize = value.trim().parse()
                    .map_err(|e| AppError::config(format!("Invalid CHART_WIDTH value '{}': {}", value, e)))?;
                if width == 0 || width > crate::defaults::MAX_CHART_WIDTH {
                    return Err(AppError::config(format!(
                        "CHART_WIDTH must be between 1 and {}, got: {}",
                        crate::defaults::MAX_CHART_WIDTH, width
                    )));
                }
            }
            "DATASETS" => {
                if value.split(',').any(|key| key.trim().chars().any(char::is_whitespace)) {
                    return Err(AppError::config(format!("Invalid DATASETS value '{}': keys cannot contain spaces", value)));
                }
            }
            _ => {
                // Unknown environment variable, ignore
            }
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            (crate::defaults::DATA_FILE_ENV, "JSON benchmark data file", "results/mce.json"),
            ("OUTPUT_FORMAT", "Output format (table or json)", "json"),
            ("ENABLE_COLOR", "Enable colored output", "true"),
            ("SHOW_HOURS", "Keep whole hours in run time labels", "false"),
            ("CHART_WIDTH", "Width of the longest histogram bar (1-200)", "50"),
            ("DATASETS", "Comma-separated dataset keys to include", "enron,wiki-vote"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<20} {}\n", var, description));
            help.push_str(&format!("  {:<20} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n");

        help
    }

    /// Validate all currently set environment variables
    pub fn validate_current_env() -> Vec<String> {
        Self::get_supported_env_vars()
            .into_iter()
            .filter_map(|(var_name, _, _)| {
                let value = std::env::var(var_name).ok()?;
                Self::validate_env_var(var_name, &value).err().map(|e| format!("Warning: {}", e))
            })
            .collect()
    }

    /// Check an env file's entries without loading them
    pub fn check_env_file(path: &Path) -> Result<Option<Vec<String>>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("Failed to read {} file: {}", path.display(), e)))?;

        let mut warnings = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                if let Err(e) = Self::validate_env_var(key.trim(), value.trim()) {
                    warnings.push(format!("Line '{}': {}", line, e));
                }
            }
        }

        Ok(Some(warnings))
    }
}
