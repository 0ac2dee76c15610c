//! Dataset Analyzer - Main CLI Application
//!
//! A configuration-driven command-line tool that computes descriptive
//! statistics over numeric datasets and persists the results as JSON or CSV.

use clap::Parser;
use dataset_analyzer::{
    cli::Cli,
    config::{display_config_summary, load_config, EnvManager},
    dataset,
    error::{AppError, Result},
    logging::Logger,
    output::{FormatterFactory, ReportWriter, SaveOutcome},
    stats::DataAnalyzer,
    PKG_NAME, VERSION,
};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }

    let use_colors = cli.use_colors();
    if !use_colors {
        colored::control::set_override(false);
    }

    // Handle the actual application logic
    if let Err(e) = run_application(cli) {
        eprintln!("{}", e.format_for_console(use_colors));
        print_error_suggestions(&e);
        process::exit(1);
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    // Utility modes run and return before the analysis pipeline
    if cli.create_sample {
        let path = dataset::create_sample_file(Path::new("."))?;
        println!("Sample data file created: {}", path.display());
        return Ok(());
    }

    if cli.validate_env {
        return run_environment_validation(&cli);
    }

    // Show debug info if requested
    if cli.debug {
        println!("Debug mode enabled");
        println!();
    }

    // Load and validate configuration
    let data_file = cli.data.clone();
    let config = load_config(cli)?;
    let logger = Logger::from_config(&config);

    println!("{} v{}", PKG_NAME, VERSION);
    if config.debug {
        println!("Configuration loaded successfully:");
        println!("{}", display_config_summary(&config));
    }
    println!("{}", "=".repeat(60));

    // Load data
    let data = dataset::load_dataset(data_file.as_deref(), &logger);
    println!("Loaded {} data points", data.len());

    // Run the configured analysis passes
    let mut analyzer = DataAnalyzer::new(config.clone());
    let report = analyzer.analyze(&data)?.clone();

    // Display results
    let formatter = FormatterFactory::create_formatter(&config);
    println!("{}", formatter.format_report(&report));

    // Save results
    let writer = ReportWriter::new(config.clone());
    match writer.save(&report)? {
        SaveOutcome::Saved(path) => {
            println!("{}", formatter.format_success(&format!("Results saved to {}", path.display())));
        }
        SaveOutcome::SkippedEmpty => {
            println!("{}", formatter.format_notice("No results to save"));
        }
        SaveOutcome::UnsupportedFormat(format) => {
            println!(
                "{}",
                formatter.format_warning(&format!("Unsupported output format: {}", format))
            );
        }
    }

    if report.is_empty() {
        return Err(AppError::statistics("Analysis produced no metrics"));
    }

    println!();
    println!("Analysis complete! Generated {} metrics.", report.len());

    Ok(())
}

/// Run the `--validate-env` utility mode
fn run_environment_validation(cli: &Cli) -> Result<()> {
    EnvManager::load_env_file(cli.debug)?;

    let output_dir = std::env::var("OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(dataset_analyzer::defaults::DEFAULT_OUTPUT_DIR));

    let report = EnvManager::validate_environment(&output_dir, Path::new("data"))?;
    println!("{}", report);

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - PRECISION must be an integer between 0 and 10");
            eprintln!("  - OUTPUT_FORMAT must be json or csv");
            eprintln!("  - ANALYSIS_MODE must be standard, detailed or advanced");
        }
        AppError::Io(_) => {
            eprintln!();
            eprintln!("File troubleshooting:");
            eprintln!("  - Check that the output directory is writable");
            eprintln!("  - Check file permissions and disk space");
        }
        AppError::Parse(_) => {
            eprintln!();
            eprintln!("Data format help:");
            eprintln!("  - Data files must contain a JSON array of numbers");
            eprintln!("  - Use --create-sample to generate a valid example file");
        }
        AppError::Statistics(_) => {
            eprintln!();
            eprintln!("Analysis troubleshooting:");
            eprintln!("  - Check that the dataset contains numeric entries");
            eprintln!("  - Advanced statistics require at least 4 data points");
        }
        _ => {}
    }
}
