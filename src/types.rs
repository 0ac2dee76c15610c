//! Type definitions and aliases

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Supported formats for persisted analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON object of metric name to value
    Json,
    /// Two-column CSV table with a `metric,value` header
    Csv,
}

impl OutputFormat {
    /// Canonical lowercase name used in configuration values
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// File name written under the output directory for this format
    pub fn results_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => crate::defaults::RESULTS_FILE_JSON,
            OutputFormat::Csv => crate::defaults::RESULTS_FILE_CSV,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(AppError::parse(format!("Unsupported output format: {}", s))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analysis depth selected via configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Basic descriptive statistics only
    Standard,
    /// Basic statistics plus percentiles, IQR and outlier metrics
    Detailed,
    /// Same metric set as detailed
    Advanced,
}

impl AnalysisMode {
    /// Canonical lowercase name used in configuration values
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Standard => "standard",
            AnalysisMode::Detailed => "detailed",
            AnalysisMode::Advanced => "advanced",
        }
    }

    /// Whether this mode includes the advanced statistics pass
    pub fn includes_advanced(&self) -> bool {
        matches!(self, AnalysisMode::Detailed | AnalysisMode::Advanced)
    }
}

impl FromStr for AnalysisMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(AnalysisMode::Standard),
            "detailed" => Ok(AnalysisMode::Detailed),
            "advanced" => Ok(AnalysisMode::Advanced),
            _ => Err(AppError::parse(format!("Invalid analysis mode: {}", s))),
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
