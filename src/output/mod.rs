//! Output formatting and report persistence
//!
//! Provides console formatters for analysis reports and the writer that
//! persists results as JSON or CSV under the configured output directory.

mod formatter;

pub use formatter::{ColoredFormatter, FormattingOptions, PlainFormatter, ReportFormatter, render_value};

use crate::{
    error::{AppError, Result},
    models::{Config, Report},
    types::OutputFormat,
};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Output formatting factory for creating appropriate formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Create a formatter based on color preference and configured precision
    pub fn create_formatter(config: &Config) -> Box<dyn ReportFormatter> {
        let options = FormattingOptions {
            enable_color: config.enable_color,
            precision: config.precision,
        };

        if config.enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }
}

/// Outcome of a save attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Results written to the given path
    Saved(PathBuf),
    /// Nothing to save; no file written
    SkippedEmpty,
    /// Configured format is not supported; no file written
    UnsupportedFormat(String),
}

/// Writes analysis reports to the configured output directory
pub struct ReportWriter {
    config: Config,
}

impl ReportWriter {
    /// Create a writer for the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Persist the report according to the configured output format.
    ///
    /// An empty report and an unsupported format both abort the save step
    /// without writing a file; neither fails the run.
    pub fn save(&self, report: &Report) -> Result<SaveOutcome> {
        if report.is_empty() {
            return Ok(SaveOutcome::SkippedEmpty);
        }

        let format = match OutputFormat::from_str(&self.config.output_format) {
            Ok(format) => format,
            Err(_) => {
                return Ok(SaveOutcome::UnsupportedFormat(self.config.output_format.clone()));
            }
        };

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| AppError::io(format!("failed to create output directory: {}", e)))?;

        let path = self.config.output_dir.join(format.results_file_name());
        let content = match format {
            OutputFormat::Json => serde_json::to_string_pretty(report)?,
            OutputFormat::Csv => Self::render_csv(report)?,
        };

        fs::write(&path, content)
            .map_err(|e| AppError::io(format!("failed to write results file: {}", e)))?;

        Ok(SaveOutcome::Saved(path))
    }

    /// Render the report as a two-column CSV table in insertion order
    fn render_csv(report: &Report) -> Result<String> {
        let mut output = String::from("metric,value\n");
        for (name, value) in report.iter() {
            // serde_json renders the value exactly as the JSON output would
            let rendered = serde_json::to_string(value)?;
            output.push_str(name);
            output.push(',');
            output.push_str(&rendered);
            output.push('\n');
        }
        Ok(output)
    }
}
