//! Main application orchestration and execution

use crate::{
    cli::Cli,
    config::{display_config_summary, load_config, validate_benchmark, ValidationLevel, ValidationWarning},
    error::{AppError, Result},
    log_debug, log_info,
    logging::LoggerFactory,
    models::{BenchmarkData, Config},
    output::{OutputCoordinator, OutputFormatterFactory},
    report::{Report, ReportBuilder, ReportOptions},
};

/// Everything one run produces: the rendered report for stdout and the
/// validation findings for stderr
#[derive(Debug)]
pub struct AppOutput {
    pub report: Report,
    pub rendered: String,
    pub warnings: Vec<ValidationWarning>,
}

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Result<Self> {
        cli.validate().map_err(AppError::config)?;
        Ok(Self { cli })
    }

    /// Run the application
    pub fn run(self) -> Result<()> {
        let config = load_config(self.cli.clone())?;

        if self.cli.color {
            colored::control::set_override(true);
        }

        let output = Self::execute(&config)?;

        let coordinator = OutputCoordinator::new(OutputFormatterFactory::from_config(&config));
        let notices: Vec<String> = output
            .warnings
            .iter()
            .filter(|w| w.level == ValidationLevel::Warning)
            .map(|w| w.message.clone())
            .collect();
        if !notices.is_empty() {
            eprintln!("{}", coordinator.render_warnings(&notices)?);
        }

        println!("{}", output.rendered);
        Ok(())
    }

    /// Load, validate, build and render a report for `config`
    pub fn execute(config: &Config) -> Result<AppOutput> {
        let loggers = LoggerFactory::new(config.clone());
        let logger = loggers.create_logger("APP");
        let mut phases = loggers.create_phase_logger();

        if config.debug {
            log_debug!(logger, "{} v{}", crate::PKG_NAME, crate::VERSION);
            logger
                .debug("Configuration loaded")
                .field("summary", display_config_summary(config))
                .log();
        }

        phases.start("load");
        let data = load_data(config)?;
        phases.end("load");
        logger.add_context_field(
            "data_source".to_string(),
            config
                .data_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "embedded".to_string()),
        );
        log_info!(
            logger,
            "Loaded {} datasets and {} algorithms",
            data.datasets.len(),
            data.algorithms.len()
        );

        phases.start("validate");
        let warnings = match validate_benchmark(&data, config) {
            Ok(warnings) => warnings,
            Err(e) => {
                loggers.create_error_logger().log_error(&e, Some("Benchmark data validation failed"));
                return Err(e);
            }
        };
        phases.end("validate");
        for warning in warnings.iter().filter(|w| w.level == ValidationLevel::Info) {
            logger
                .info(&warning.format(false))
                .field("level", warning.level.as_str())
                .log();
        }

        phases.start("build");
        let report = ReportBuilder::build(&data, &ReportOptions::from_config(config))?;
        phases.end("build");
        logger
            .info(&format!("Built report for {} datasets", report.datasets.len()))
            .field("duration_style", report.duration_style)
            .log();

        phases.start("render");
        let coordinator = OutputCoordinator::new(OutputFormatterFactory::from_config(config));
        let rendered = coordinator.render(&report, config.output_format)?;
        phases.end("render");

        if config.verbose {
            let winners: Vec<String> = report
                .fastest
                .iter()
                .map(|(dataset, fastest)| format!("{}={}", dataset, fastest.algorithm))
                .collect();
            logger
                .info("Report rendered")
                .field("format", config.output_format)
                .field("fastest", winners)
                .log();
        }

        Ok(AppOutput { report, rendered, warnings })
    }
}

/// The configured data file, or the embedded results
pub fn load_data(config: &Config) -> Result<BenchmarkData> {
    match config.data_file {
        Some(ref path) => BenchmarkData::load(path),
        None => Ok(BenchmarkData::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{builtin, OutputFormat};
    use clap::Parser;
    use std::io::Write;

    fn plain_config() -> Config {
        let mut config = Config::default();
        config.enable_color = false;
        config
    }

    #[test]
    fn test_new_rejects_conflicting_flags() {
        let cli = Cli::parse_from(["test", "--color", "--no-color"]);
        assert!(matches!(App::new(cli), Err(AppError::Config(_))));
    }

    #[test]
    fn test_execute_builtin_table() {
        let output = App::execute(&plain_config()).unwrap();
        assert!(output.warnings.is_empty());
        assert!(output.rendered.contains("Email-Enron"));
        assert!(output.rendered.contains("226,859"));
        assert_eq!(output.report.fastest.get(builtin::ENRON).unwrap().algorithm, builtin::TOMITA);
    }

    #[test]
    fn test_execute_json_with_filter() {
        let mut config = plain_config();
        config.output_format = OutputFormat::Json;
        config.datasets = vec![builtin::AS_SKITTER.to_string()];

        let output = App::execute(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output.rendered).unwrap();
        assert_eq!(value["datasets"].as_array().unwrap().len(), 1);
        assert_eq!(value["fastest"]["as-skitter"]["algorithm"], "ELS");
    }

    #[test]
    fn test_execute_data_file_with_long_run() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "datasets": [{{ "key": "g", "title": "Graph" }}],
                "algorithms": [{{ "name": "A", "runs": {{ "g": {{ "clique_count": 5, "duration": "02:03:04:005" }} }} }}]
            }}"#
        )
        .unwrap();

        let mut config = plain_config();
        config.data_file = Some(file.path().to_path_buf());

        let output = App::execute(&config).unwrap();
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.report.datasets[0].runs[0].label, "3m 4s 5ms");

        config.show_hours = true;
        let output = App::execute(&config).unwrap();
        assert!(output.warnings.is_empty());
        assert_eq!(output.report.datasets[0].runs[0].label, "2h 3m 4s 5ms");
    }

    #[test]
    fn test_execute_missing_data_file() {
        let mut config = plain_config();
        config.data_file = Some(std::path::PathBuf::from("/definitely/not/here.json"));
        let err = App::execute(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to read data file"));
    }

    #[test]
    fn test_execute_unknown_dataset() {
        let mut config = plain_config();
        config.datasets = vec!["nope".to_string()];
        let err = App::execute(&config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
