//! Console logging for the dataset analyzer
//!
//! Provides a small leveled logger with timestamped output, optional color
//! and verbosity gating driven by the resolved configuration.

use crate::error::{AppError, Result};
use crate::models::Config;
use chrono::{DateTime, Utc};

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug level - detailed information for debugging
    Debug = 0,
    /// Info level - general application information
    Info = 1,
    /// Warning level - potentially harmful situations
    Warn = 2,
    /// Error level - error events but application can continue
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Colorize a level tag for console output
    fn tag(&self, use_color: bool) -> String {
        if !use_color {
            return self.as_str().to_string();
        }
        use colored::Colorize;
        match self {
            LogLevel::Debug => self.as_str().cyan().to_string(),
            LogLevel::Info => self.as_str().green().to_string(),
            LogLevel::Warn => self.as_str().yellow().to_string(),
            LogLevel::Error => self.as_str().red().to_string(),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Leveled console logger
#[derive(Debug, Clone)]
pub struct Logger {
    /// Minimum log level to output
    min_level: LogLevel,
    /// Whether to use colored output
    use_color: bool,
    /// Whether to prefix entries with a timestamp
    show_timestamps: bool,
}

impl Logger {
    /// Create a logger with an explicit minimum level
    pub fn new(min_level: LogLevel, use_color: bool) -> Self {
        Self {
            min_level,
            use_color,
            show_timestamps: false,
        }
    }

    /// Create a logger from the resolved application configuration.
    /// Debug mode lowers the threshold and enables timestamps.
    pub fn from_config(config: &Config) -> Self {
        let min_level = if config.debug {
            LogLevel::Debug
        } else if config.verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };
        Self {
            min_level,
            use_color: config.enable_color,
            show_timestamps: config.debug,
        }
    }

    /// Check whether a level would be emitted
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Emit a log entry at the given level
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let line = self.format_entry(level, message, Utc::now());
        if level >= LogLevel::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Render a single entry
    fn format_entry(&self, level: LogLevel, message: &str, timestamp: DateTime<Utc>) -> String {
        if self.show_timestamps {
            format!(
                "{} [{}] {}",
                timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                level.tag(self.use_color),
                message
            )
        } else {
            format!("[{}] {}", level.tag(self.use_color), message)
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Warn, crate::defaults::DEFAULT_ENABLE_COLOR)
    }
}
