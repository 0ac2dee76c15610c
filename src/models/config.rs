//! Configuration data model and validation

use crate::types::{AnalysisMode, AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Decimal precision applied to computed metrics (0-10)
    #[serde(default = "default_precision")]
    pub precision: u8,

    /// Output format for persisted results. Kept as the raw configured
    /// string so an unsupported value only aborts the save step.
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Analysis depth
    #[serde(default = "default_analysis_mode")]
    pub analysis_mode: AnalysisMode,

    /// Whether advanced statistics include outlier metrics
    #[serde(default = "default_include_outliers")]
    pub include_outliers: bool,

    /// Directory where result files are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            output_format: default_output_format(),
            analysis_mode: default_analysis_mode(),
            include_outliers: default_include_outliers(),
            output_dir: default_output_dir(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.precision > 10 {
            return Err(AppError::config(format!(
                "Precision must be between 0 and 10, got: {}",
                self.precision
            )));
        }

        // The format string itself is validated lazily at save time; only an
        // empty value is rejected here.
        if self.output_format.trim().is_empty() {
            return Err(AppError::config("Output format cannot be empty"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(AppError::config("Output directory cannot be empty"));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(precision) = std::env::var("PRECISION") {
            let parsed: u8 = precision
                .parse()
                .map_err(|e| AppError::config(format!("Invalid PRECISION value '{}': {}", precision, e)))?;
            self.precision = parsed;
        }

        if let Ok(format) = std::env::var("OUTPUT_FORMAT") {
            let format = format.trim();
            if !format.is_empty() {
                self.output_format = format.to_lowercase();
            }
        }

        if let Ok(mode) = std::env::var("ANALYSIS_MODE") {
            self.analysis_mode = AnalysisMode::from_str(&mode)
                .map_err(|e| AppError::config(format!("Invalid ANALYSIS_MODE value '{}': {}", mode, e)))?;
        }

        if let Ok(include_outliers) = std::env::var("INCLUDE_OUTLIERS") {
            self.include_outliers = include_outliers
                .to_lowercase()
                .parse()
                .map_err(|e| AppError::config(format!("Invalid INCLUDE_OUTLIERS value '{}': {}", include_outliers, e)))?;
        }

        if let Ok(output_dir) = std::env::var("OUTPUT_DIR") {
            if !output_dir.trim().is_empty() {
                self.output_dir = PathBuf::from(output_dir);
            }
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_precision() -> u8 {
    crate::defaults::DEFAULT_PRECISION
}

fn default_output_format() -> String {
    crate::defaults::DEFAULT_OUTPUT_FORMAT.to_string()
}

fn default_analysis_mode() -> AnalysisMode {
    crate::defaults::DEFAULT_ANALYSIS_MODE
}

fn default_include_outliers() -> bool {
    crate::defaults::DEFAULT_INCLUDE_OUTLIERS
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_OUTPUT_DIR)
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.precision, 2);
        assert_eq!(config.output_format, "json");
        assert_eq!(config.analysis_mode, AnalysisMode::Standard);
        assert!(config.include_outliers);
    }

    #[test]
    fn test_precision_out_of_range_invalid() {
        let mut config = Config::default();
        config.precision = 11;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_output_format_invalid() {
        let mut config = Config::default();
        config.output_format = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unsupported_output_format_passes_validation() {
        // An unknown format only aborts the save step, not the run.
        let mut config = Config::default();
        config.output_format = "xml".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_output_dir_invalid() {
        let mut config = Config::default();
        config.output_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.precision, crate::defaults::DEFAULT_PRECISION);
        assert_eq!(config.output_format, crate::defaults::DEFAULT_OUTPUT_FORMAT);
        assert!(!config.verbose);
        assert!(!config.debug);
    }
}
