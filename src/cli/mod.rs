//! Command-line interface definition and flag validation

use crate::types::{AnalysisMode, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Dataset Analyzer - descriptive statistics for numeric datasets
#[derive(Parser, Debug, Clone)]
#[command(name = "dataset-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to data file (JSON array of numbers)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Create sample data file and exit
    #[arg(long)]
    pub create_sample: bool,

    /// Validate environment configuration and exit
    #[arg(long)]
    pub validate_env: bool,

    /// Analysis mode override
    #[arg(long, value_enum)]
    pub mode: Option<AnalysisMode>,

    /// Output format override
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Decimal precision override (0-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub precision: Option<u8>,

    /// Output directory override
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        // Utility modes are mutually exclusive
        if self.create_sample && self.validate_env {
            return Err("Cannot specify both --create-sample and --validate-env".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }

    /// Check if a utility mode should run instead of the analysis pipeline
    pub fn is_utility_mode(&self) -> bool {
        self.create_sample || self.validate_env
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    // Check for common environment variables that indicate color support
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check for NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for FORCE_COLOR environment variable
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let cli = Cli::parse_from(["dsa"]);
        assert!(cli.data.is_none());
        assert!(!cli.create_sample);
        assert!(!cli.validate_env);
        assert!(cli.mode.is_none());
        assert!(cli.output_format.is_none());
        assert!(cli.precision.is_none());
        assert!(cli.validate().is_ok());
        assert!(!cli.is_utility_mode());
    }

    #[test]
    fn test_full_flag_set() {
        let cli = Cli::parse_from([
            "dsa",
            "--data", "data/sample_dataset.json",
            "--mode", "advanced",
            "--output-format", "csv",
            "--precision", "3",
            "--output-dir", "./reports",
            "--verbose",
        ]);

        assert_eq!(cli.data.as_deref(), Some(std::path::Path::new("data/sample_dataset.json")));
        assert_eq!(cli.mode, Some(AnalysisMode::Advanced));
        assert_eq!(cli.output_format, Some(OutputFormat::Csv));
        assert_eq!(cli.precision, Some(3));
        assert_eq!(cli.output_dir.as_deref(), Some(std::path::Path::new("./reports")));
        assert!(cli.verbose);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_precision_range_enforced_at_parse() {
        assert!(Cli::try_parse_from(["dsa", "--precision", "10"]).is_ok());
        assert!(Cli::try_parse_from(["dsa", "--precision", "11"]).is_err());
    }

    #[test]
    fn test_invalid_mode_rejected_at_parse() {
        assert!(Cli::try_parse_from(["dsa", "--mode", "quick"]).is_err());
        assert!(Cli::try_parse_from(["dsa", "--output-format", "xml"]).is_err());
    }

    #[test]
    fn test_color_flag_conflict() {
        let cli = Cli::parse_from(["dsa", "--color", "--no-color"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_utility_mode_conflict() {
        let cli = Cli::parse_from(["dsa", "--create-sample", "--validate-env"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["dsa", "--create-sample"]);
        assert!(cli.validate().is_ok());
        assert!(cli.is_utility_mode());
    }

    #[test]
    fn test_color_override_flags() {
        let cli = Cli::parse_from(["dsa", "--color"]);
        assert!(cli.use_colors());

        let cli = Cli::parse_from(["dsa", "--no-color"]);
        assert!(!cli.use_colors());
    }
}
