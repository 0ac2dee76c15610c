//! Report formatting traits and implementations
//!
//! Defines the console formatting interface for analysis reports and
//! provides plain and colored implementations.

use crate::models::{MetricValue, Report};
use std::fmt::Write as _;

/// Width of the dashed rule around the report body
const RULE_WIDTH: usize = 50;

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Decimal precision for floating-point metric values
    pub precision: u8,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: crate::defaults::DEFAULT_ENABLE_COLOR,
            precision: crate::defaults::DEFAULT_PRECISION,
        }
    }
}

/// Main trait for report formatting
pub trait ReportFormatter {
    /// Format a header line
    fn format_header(&self, title: &str) -> String;

    /// Format the metric report body
    fn format_report(&self, report: &Report) -> String;

    /// Format an informational notice
    fn format_notice(&self, message: &str) -> String;

    /// Format a warning message
    fn format_warning(&self, warning: &str) -> String;

    /// Format a success message
    fn format_success(&self, message: &str) -> String;
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    /// Render the report body: title-cased metric names padded left,
    /// values right-aligned with the configured precision
    fn render_entries(&self, report: &Report) -> String {
        let mut output = String::new();
        for (name, value) in report.iter() {
            let label = title_case(name);
            let rendered = render_value(value, self.options.precision);
            let _ = writeln!(output, "{:<20}: {:>10}", label, rendered);
        }
        output
    }
}

impl ReportFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> String {
        format!("\n{}\n{}", title, "-".repeat(RULE_WIDTH))
    }

    fn format_report(&self, report: &Report) -> String {
        if report.is_empty() {
            return "No results to display".to_string();
        }

        let mut output = self.format_header("Analysis Results:");
        output.push('\n');
        output.push_str(&self.render_entries(report));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output
    }

    fn format_notice(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_warning(&self, warning: &str) -> String {
        format!("Warning: {}", warning)
    }

    fn format_success(&self, message: &str) -> String {
        message.to_string()
    }
}

/// Colored formatter using ANSI terminal colors
pub struct ColoredFormatter {
    plain: PlainFormatter,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            plain: PlainFormatter::new(options),
        }
    }
}

impl ReportFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> String {
        use colored::Colorize;
        format!("\n{}\n{}", title.cyan().bold(), "-".repeat(RULE_WIDTH))
    }

    fn format_report(&self, report: &Report) -> String {
        use colored::Colorize;
        if report.is_empty() {
            return "No results to display".yellow().to_string();
        }

        let mut output = self.format_header("Analysis Results:");
        output.push('\n');
        output.push_str(&self.plain.render_entries(report));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output
    }

    fn format_notice(&self, message: &str) -> String {
        use colored::Colorize;
        message.cyan().to_string()
    }

    fn format_warning(&self, warning: &str) -> String {
        use colored::Colorize;
        format!("Warning: {}", warning).yellow().to_string()
    }

    fn format_success(&self, message: &str) -> String {
        use colored::Colorize;
        message.green().to_string()
    }
}

/// Render a metric value: counts as integers, measurements with the
/// configured number of decimal places
pub fn render_value(value: &MetricValue, precision: u8) -> String {
    match value {
        MetricValue::Count(n) => n.to_string(),
        MetricValue::Number(x) => format!("{:.*}", precision as usize, x),
    }
}

/// Turn a metric key like `std_dev` into a display label like `Std Dev`
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
