//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    config::env::EnvManager,
    error::Result,
    models::Config,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        // Start with default configuration
        let mut config = Config::default();

        // Load from environment file if it exists
        self.load_env_file()?;

        // Merge environment variables into config
        config.merge_from_env()?;

        // Override with CLI arguments
        self.apply_cli_overrides(&mut config);

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Load .env file if it exists
    fn load_env_file(&self) -> Result<()> {
        EnvManager::load_env_file(self.cli.debug)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(precision) = self.cli.precision {
            config.precision = precision;
        }

        if let Some(format) = self.cli.output_format {
            config.output_format = format.as_str().to_string();
        }

        if let Some(mode) = self.cli.mode {
            config.analysis_mode = mode;
        }

        if let Some(ref output_dir) = self.cli.output_dir {
            config.output_dir = output_dir.clone();
        }

        // Override color setting if --no-color is specified
        if self.cli.no_color {
            config.enable_color = false;
        }

        // Set verbose and debug flags (these are CLI-only)
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        if config.debug {
            println!("Applied CLI overrides to configuration");
            println!(
                "Final config: precision={}, output_format={}, analysis_mode={}",
                config.precision, config.output_format, config.analysis_mode
            );
        }
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    let parser = ConfigParser::new(cli);
    parser.parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Precision: {}", config.precision));
    summary.push(format!("Output Format: {}", config.output_format));
    summary.push(format!("Analysis Mode: {}", config.analysis_mode));
    summary.push(format!("Include Outliers: {}", config.include_outliers));
    summary.push(format!("Output Directory: {}", config.output_dir.display()));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
