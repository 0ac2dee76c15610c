//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use crate::types::{AnalysisMode, OutputFormat};
use std::path::Path;
use std::str::FromStr;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        // Try to load .env from current directory
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                println!("Loaded configuration from .env file");
            }
        } else if debug {
            println!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Dataset Analyzer Configuration
#
# This file contains environment variables that can be used to configure
# the dataset analyzer. Values specified here will be used as defaults,
# but can be overridden by command-line arguments.

# Decimal precision for computed metrics (0-10)
# PRECISION=2

# Format for persisted results (json or csv)
# OUTPUT_FORMAT=json

# Analysis depth (standard, detailed or advanced)
# ANALYSIS_MODE=standard

# Include outlier metrics in advanced statistics (true/false)
# INCLUDE_OUTLIERS=true

# Directory where result files are written
# OUTPUT_DIR=./output

# Example configurations for different scenarios:
#
# Full analysis with high precision:
# ANALYSIS_MODE=advanced
# PRECISION=4
#
# Spreadsheet-friendly output:
# OUTPUT_FORMAT=csv
# OUTPUT_DIR=./reports
"#
        .to_string()
    }

    /// Save example .env file to disk
    pub fn save_example_env_file(path: &Path) -> Result<()> {
        use std::fs;

        let content = Self::create_example_env_content();
        fs::write(path, content)
            .map_err(|e| AppError::config(format!("Failed to write example .env file: {}", e)))?;

        Ok(())
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "PRECISION" => {
                let precision: u8 = value
                    .parse()
                    .map_err(|e| AppError::config(format!("Invalid PRECISION value '{}': {}", value, e)))?;
                if precision > 10 {
                    return Err(AppError::config(format!(
                        "PRECISION must be between 0 and 10, got: {}",
                        precision
                    )));
                }
            }
            "OUTPUT_FORMAT" => {
                OutputFormat::from_str(value)
                    .map_err(|_| AppError::config(format!("Invalid OUTPUT_FORMAT value '{}': expected json or csv", value)))?;
            }
            "ANALYSIS_MODE" => {
                AnalysisMode::from_str(value)
                    .map_err(|_| AppError::config(format!(
                        "Invalid ANALYSIS_MODE value '{}': expected standard, detailed or advanced",
                        value
                    )))?;
            }
            "INCLUDE_OUTLIERS" => {
                value.to_lowercase().parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid INCLUDE_OUTLIERS value '{}': {}", value, e)))?;
            }
            "OUTPUT_DIR" => {
                if value.trim().is_empty() {
                    return Err(AppError::config("OUTPUT_DIR cannot be empty"));
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
            ("PRECISION", "Decimal precision for computed metrics (0-10)", "2"),
            ("OUTPUT_FORMAT", "Format for persisted results", "json"),
            ("ANALYSIS_MODE", "Analysis depth", "standard"),
            ("INCLUDE_OUTLIERS", "Include outlier metrics in advanced statistics", "true"),
            ("OUTPUT_DIR", "Directory where result files are written", "./output"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<18} {}\n", var, description));
            help.push_str(&format!("  {:<18} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n");

        help
    }

    /// Validate all currently set environment variables
    pub fn validate_current_env() -> Result<Vec<String>> {
        let mut warnings = Vec::new();

        for (var_name, _, _) in Self::get_supported_env_vars() {
            if let Ok(value) = std::env::var(var_name) {
                if let Err(e) = Self::validate_env_var(var_name, &value) {
                    warnings.push(format!("Warning: {}", e));
                }
            }
        }

        Ok(warnings)
    }

    /// Check if .env file exists and validate its contents
    pub fn check_env_file() -> Result<Option<Vec<String>>> {
        if !Path::new(".env").exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(".env")
            .map_err(|e| AppError::config(format!("Failed to read .env file: {}", e)))?;

        let mut warnings = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                if let Err(e) = Self::validate_env_var(key, value) {
                    warnings.push(format!("Line '{}': {}", line, e));
                }
            }
        }

        Ok(Some(warnings))
    }

    /// Build the environment validation report for `--validate-env`.
    /// Ensures the output and data directories exist, echoes recognized
    /// environment variables and collects validation warnings.
    pub fn validate_environment(output_dir: &Path, data_dir: &Path) -> Result<String> {
        use std::fmt::Write as _;
        use std::fs;

        let mut report = String::new();
        report.push_str("Environment Validation:\n");
        let _ = writeln!(report, "{} v{}", crate::PKG_NAME, crate::VERSION);

        for dir in [output_dir, data_dir] {
            if !dir.exists() {
                let _ = writeln!(report, "Creating directory: {}", dir.display());
                fs::create_dir_all(dir)
                    .map_err(|e| AppError::io(format!("failed to create {}: {}", dir.display(), e)))?;
            }
        }

        for (var_name, _, _) in Self::get_supported_env_vars() {
            if let Ok(value) = std::env::var(var_name) {
                let _ = writeln!(report, "{}: {}", var_name, value);
            }
        }

        if let Some(file_warnings) = Self::check_env_file()? {
            for warning in file_warnings {
                let _ = writeln!(report, ".env {}", warning);
            }
        }

        for warning in Self::validate_current_env()? {
            let _ = writeln!(report, "{}", warning);
        }

        report.push_str("Environment validation complete");
        Ok(report)
    }
}
