//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    models::Config,
    error::Result,
    config::env::EnvManager,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        self.load_env_file()?;
        self.parse_without_env_file()
    }

    /// Build the configuration from the process environment and CLI only
    pub fn parse_without_env_file(&self) -> Result<Config> {
        let mut config = Config::default();

        config.merge_from_env()?;
        self.apply_cli_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Load .env file if it exists
    fn load_env_file(&self) -> Result<()> {
        EnvManager::load_env_file(self.cli.debug)?;

        if self.cli.debug {
            for warning in EnvManager::validate_current_env() {
                eprintln!("{}", warning);
            }
        }

        Ok(())
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(ref path) = self.cli.data {
            config.data_file = Some(path.clone());
        }

        if let Some(format) = self.cli.format {
            config.output_format = format;
        }

        if self.cli.color {
            config.enable_color = true;
        } else if self.cli.no_color || !crate::cli::supports_color() {
            config.enable_color = false;
        }

        if self.cli.show_hours {
            config.show_hours = true;
        }

        if let Some(width) = self.cli.chart_width {
            config.chart_width = width;
        }

        if !self.cli.datasets.is_empty() {
            config.datasets = self.cli.datasets.iter().map(|d| d.trim().to_string()).collect();
        }

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!(
        "Data File: {}",
        config
            .data_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(embedded results)".to_string())
    ));
    summary.push(format!("Output Format: {:?}", config.output_format));
    summary.push(format!(
        "Datasets: {}",
        if config.datasets.is_empty() { "all".to_string() } else { config.datasets.join(", ") }
    ));
    summary.push(format!("Show Hours: {}", config.show_hours));
    summary.push(format!("Chart Width: {}", config.chart_width));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
