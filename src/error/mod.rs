//! Error handling for the clique benchmark report

use thiserror::Error;

use crate::duration::FormatError;

/// Custom error types for the clique benchmark report
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed duration strings in benchmark data
    #[error("Duration format error: {0}")]
    Format(#[from] FormatError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (JSON, numbers, flags)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Inconsistent benchmark data (missing runs, unknown datasets)
    #[error("Benchmark data error: {0}")]
    Data(String),

    /// Report rendering errors
    #[error("Output error: {0}")]
    Output(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new benchmark data error
    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::Data(message.into())
    }

    /// Create a new output error
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Format(_) => "FORMAT",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Data(_) => "DATA",
            Self::Output(_) => "OUTPUT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file or command line arguments.", msg)
            }
            Self::Format(err) => {
                format!("Invalid run time: {}\n\nSuggestion: Run times must look like HH:MM:SS:mmm, for example 00:01:17:271.", err)
            }
            Self::Validation(msg) => {
                format!("Invalid benchmark data: {}\n\nSuggestion: Check dataset keys, algorithm names and histogram entries in your data file.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check that the data file exists and is readable.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse data: {}\n\nSuggestion: Check the JSON structure of your data file (see --help-topic data).", msg)
            }
            Self::Data(msg) => {
                format!("Incomplete benchmark data: {}\n\nSuggestion: Every algorithm needs a recorded run for each dataset in the report.", msg)
            }
            Self::Output(msg) => {
                format!("Failed to render report: {}\n\nSuggestion: Try --format json or --no-color.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Parse(_) => 1,  // Invalid configuration/usage
            Self::Format(_) | Self::Validation(_) | Self::Data(_) => 2,  // Bad benchmark data
            Self::Io(_) => 5,
            Self::Output(_) => 6,
            Self::Internal(_) => 99,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Format(_) | Self::Validation(_) | Self::Data(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Io(_) | Self::Output(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON parse error: {}", error))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::parse(format!("Integer parse error: {}", error))
    }
}

impl From<std::str::ParseBoolError> for AppError {
    fn from(error: std::str::ParseBoolError) -> Self {
        Self::parse(format!("Boolean parse error: {}", error))
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(error: std::fmt::Error) -> Self {
        Self::output(error.to_string())
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error, keeping its category
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error
    fn context(self, message: &'static str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let context = f();
            match e.into() {
                AppError::Config(msg) => AppError::Config(format!("{}: {}", context, msg)),
                AppError::Validation(msg) => AppError::Validation(format!("{}: {}", context, msg)),
                AppError::Io(msg) => AppError::Io(format!("{}: {}", context, msg)),
                AppError::Parse(msg) => AppError::Parse(format!("{}: {}", context, msg)),
                AppError::Data(msg) => AppError::Data(format!("{}: {}", context, msg)),
                AppError::Output(msg) => AppError::Output(format!("{}: {}", context, msg)),
                AppError::Format(err) => AppError::Data(format!("{}: {}", context, err)),
                AppError::Internal(msg) => AppError::Internal(format!("{}: {}", context, msg)),
            }
        })
    }

    fn context(self, message: &'static str) -> Result<T> {
        self.with_context(|| message.to_string())
    }
}

/// Error reporter for user feedback on stderr
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", self.render(error));
    }

    /// Render the text `report_error` prints
    pub fn render(&self, error: &AppError) -> String {
        let mut output = error.format_for_console(self.use_color);
        if self.verbose {
            output.push_str("\n\n");
            output.push_str(&error.user_friendly_message());
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(AppError::config("x").category(), "CONFIG");
        assert_eq!(AppError::validation("x").category(), "VALIDATION");
        assert_eq!(AppError::data("x").category(), "DATA");
        assert_eq!(AppError::from(FormatError::FieldCount { input: "1:2".into(), found: 2 }).category(), "FORMAT");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::config("x").exit_code(), 1);
        assert_eq!(AppError::data("x").exit_code(), 2);
        assert_eq!(AppError::io("x").exit_code(), 5);
        assert_eq!(AppError::internal("x").exit_code(), 99);
    }

    #[test]
    fn test_format_error_conversion_keeps_message() {
        let err: AppError = FormatError::FieldCount { input: "00:01".into(), found: 2 }.into();
        assert!(err.to_string().contains("00:01"));
        assert!(err.user_friendly_message().contains("HH:MM:SS:mmm"));
    }

    #[test]
    fn test_console_format_without_color() {
        let err = AppError::validation("duplicate dataset key 'enron'");
        assert_eq!(
            err.format_for_console(false),
            "[VALIDATION] Validation error: duplicate dataset key 'enron'"
        );
    }

    #[test]
    fn test_with_context_preserves_category() {
        let result: std::result::Result<(), AppError> = Err(AppError::io("no such file"));
        let err = result.with_context(|| "Loading data.json".to_string()).unwrap_err();
        assert_eq!(err.category(), "IO");
        assert!(err.to_string().contains("Loading data.json: no such file"));
    }

    #[test]
    fn test_std_conversions() {
        let err: AppError = "abc".parse::<u32>().unwrap_err().into();
        assert!(matches!(err, AppError::Parse(_)));

        let err: AppError = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_reporter_verbose_adds_suggestion() {
        let reporter = ErrorReporter::new(false, true);
        let text = reporter.render(&AppError::config("bad CHART_WIDTH"));
        assert!(text.starts_with("[CONFIG]"));
        assert!(text.contains("Suggestion"));

        let terse = ErrorReporter::new(false, false).render(&AppError::config("bad CHART_WIDTH"));
        assert!(!terse.contains("Suggestion"));
    }
}
