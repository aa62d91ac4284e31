//! Clique Report - Main CLI Application
//!
//! Renders maximal clique enumeration benchmark results as a terminal
//! report or as JSON.

use clap::Parser;
use clique_report::{
    app::App,
    cli::Cli,
    error::{AppError, ErrorReporter},
};
use std::process;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue together with the data file you used.");
        process::exit(1);
    }));

    let cli = Cli::parse();

    if cli.should_show_topic_help() {
        println!("{}", cli.display_help());
        return;
    }

    let reporter = ErrorReporter::new(cli.use_colors(), cli.verbose);

    let result = App::new(cli).and_then(App::run);
    if let Err(e) = result {
        reporter.report_error(&e);
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - CHART_WIDTH must be between 1 and {}", clique_report::defaults::MAX_CHART_WIDTH);
            eprintln!("  - OUTPUT_FORMAT must be 'table' or 'json'");
            eprintln!("  - Run with --help-topic examples for sample invocations");
        }
        AppError::Io(_) | AppError::Parse(_) => {
            eprintln!();
            eprintln!("Data file help:");
            eprintln!("  - Check the path given to --data or {}", clique_report::defaults::DATA_FILE_ENV);
            eprintln!("  - Run with --help-topic data to see the expected JSON layout");
        }
        AppError::Format(_) | AppError::Validation(_) | AppError::Data(_) => {
            eprintln!();
            eprintln!("Benchmark data help:");
            eprintln!("  - Run times must be HH:MM:SS:mmm with digits only");
            eprintln!("  - Every algorithm needs a run for each reported dataset");
            eprintln!("  - --dataset keys must match the keys in the data file");
        }
        _ => {}
    }
}
