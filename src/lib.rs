//! Dataset Analyzer
//!
//! A configuration-driven command-line tool that loads a numeric dataset,
//! computes descriptive statistics (mean, median, standard deviation,
//! variance, percentiles, IQR-based outliers), prints a formatted report,
//! and optionally persists the results as JSON or CSV.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, MetricValue, Report};
pub use output::{FormatterFactory, PlainFormatter, ColoredFormatter, ReportFormatter, ReportWriter, SaveOutcome};
pub use stats::DataAnalyzer;
pub use types::{AnalysisMode, OutputFormat};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    use crate::types::AnalysisMode;

    /// Decimal precision applied to every computed metric
    pub const DEFAULT_PRECISION: u8 = 2;
    pub const DEFAULT_OUTPUT_FORMAT: &str = "json";
    pub const DEFAULT_ANALYSIS_MODE: AnalysisMode = AnalysisMode::Standard;
    pub const DEFAULT_INCLUDE_OUTLIERS: bool = true;
    pub const DEFAULT_OUTPUT_DIR: &str = "./output";
    pub const DEFAULT_ENABLE_COLOR: bool = true;

    /// Percentiles reported by the advanced statistics pass
    pub const REPORT_PERCENTILES: &[u8] = &[25, 50, 75, 90, 95];

    /// Names of the files written by the save step
    pub const RESULTS_FILE_JSON: &str = "analysis_results.json";
    pub const RESULTS_FILE_CSV: &str = "analysis_results.csv";

    /// Relative path of the generated sample data file
    pub const SAMPLE_FILE: &str = "data/sample_dataset.json";

    /// Built-in dataset used when no data file is given or loading fails
    pub const SAMPLE_DATASET: &[f64] = &[
        23.5, 18.2, 31.7, 45.1, 29.8, 16.4, 38.9, 52.3, 27.6, 41.2,
        19.8, 34.5, 28.1, 47.6, 22.9, 36.7, 33.4, 26.8, 42.1, 30.5,
        15.3, 48.7, 35.9, 21.4, 39.6, 25.1, 44.8, 32.3, 17.9, 46.2,
        12.8, 55.1, 37.4, 24.7, 43.9, 18.6, 50.2, 29.3, 35.8, 41.7,
        14.2, 49.5, 33.7, 26.4, 40.8, 20.1, 45.6, 31.9, 38.3, 42.7,
    ];

    /// Shorter dataset written by `--create-sample`
    pub const SAMPLE_FILE_DATASET: &[f64] = &[
        23.5, 18.2, 31.7, 45.1, 29.8, 16.4, 38.9, 52.3, 27.6, 41.2,
        19.8, 34.5, 28.1, 47.6, 22.9, 36.7, 33.4, 26.8, 42.1, 30.5,
        15.3, 48.7, 35.9, 21.4, 39.6, 25.1, 44.8, 32.3, 17.9, 46.2,
    ];
}
