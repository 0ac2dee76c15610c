//! Statistical analysis engine for numeric datasets

use crate::{
    error::{AppError, Result},
    models::{Config, Report},
};


/// Analysis engine holding the resolved configuration and the accumulated
/// metric report
pub struct DataAnalyzer {
    /// Configuration for precision, mode and outlier gating
    config: Config,
    /// Metrics computed so far, in insertion order
    results: Report,
}

impl DataAnalyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            results: Report::new(),
        }
    }

    /// Create an analyzer with default configuration
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// Access the accumulated report
    pub fn results(&self) -> &Report {
        &self.results
    }

    /// Discard accumulated metrics
    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Run the configured analysis passes over the dataset and merge the
    /// metrics into the report. Returns the accumulated report.
    pub fn analyze(&mut self, data: &[f64]) -> Result<&Report> {
        for value in data {
            if !value.is_finite() {
                return Err(AppError::statistics(format!(
                    "Dataset contains a non-finite value: {}",
                    value
                )));
            }
        }

        let basic = self.basic_stats(data);
        self.results.merge(basic);

        if self.config.analysis_mode.includes_advanced() {
            let advanced = self.advanced_stats(data);
            self.results.merge(advanced);
        }

        Ok(&self.results)
    }

    /// Basic descriptive statistics: count, mean, median, min, max, and for
    /// more than one point the sample standard deviation and variance.
    /// An empty dataset yields an empty report.
    pub fn basic_stats(&self, data: &[f64]) -> Report {
        let mut report = Report::new();
        if data.is_empty() {
            return report;
        }

        report.insert("count", data.len() as u64);
        report.insert("mean", self.round(Self::mean(data)));
        report.insert("median", self.round(Self::median(data)));
        report.insert("min", self.round(data.iter().copied().fold(f64::INFINITY, f64::min)));
        report.insert("max", self.round(data.iter().copied().fold(f64::NEG_INFINITY, f64::max)));

        if data.len() > 1 {
            let variance = Self::sample_variance(data);
            report.insert("std_dev", self.round(variance.sqrt()));
            report.insert("variance", self.round(variance));
        }

        report
    }

    /// Advanced statistics: nearest-rank percentiles, interquartile range
    /// and IQR-fence outlier metrics. Datasets with fewer than four points
    /// yield an empty report.
    pub fn advanced_stats(&self, data: &[f64]) -> Report {
        let mut report = Report::new();
        if data.len() < 4 {
            return report;
        }

        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        for &p in crate::defaults::REPORT_PERCENTILES {
            let value = Self::percentile(&sorted, p);
            report.insert(&format!("p{}", p), self.round(value));
        }

        // Quartiles and the fence bounds use the already-rounded values
        let q1 = report.value("p25").unwrap_or(0.0);
        let q3 = report.value("p75").unwrap_or(0.0);
        let iqr = self.round(q3 - q1);
        report.insert("iqr", iqr);

        if self.config.include_outliers {
            let lower_bound = q1 - 1.5 * iqr;
            let upper_bound = q3 + 1.5 * iqr;
            let outlier_count = data
                .iter()
                .filter(|&&x| x < lower_bound || x > upper_bound)
                .count();

            report.insert("outlier_count", outlier_count as u64);
            report.insert(
                "outlier_percentage",
                self.round(outlier_count as f64 / data.len() as f64 * 100.0),
            );
        }

        report
    }

    /// Arithmetic mean
    fn mean(data: &[f64]) -> f64 {
        data.iter().sum::<f64>() / data.len() as f64
    }

    /// Median: middle element for odd counts, average of the two middle
    /// elements for even counts
    fn median(data: &[f64]) -> f64 {
        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        }
    }

    /// Sample variance with Bessel's correction. Requires at least two
    /// points; callers gate on length.
    fn sample_variance(data: &[f64]) -> f64 {
        let mean = Self::mean(data);
        data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (data.len() - 1) as f64
    }

    /// Nearest-rank percentile over ascending-sorted data: the element at
    /// index floor(n * p / 100), clamped to the valid range. No
    /// interpolation.
    fn percentile(sorted: &[f64], p: u8) -> f64 {
        let n = sorted.len();
        let index = (n * p as usize / 100).min(n - 1);
        sorted[index]
    }

    /// Round to the configured decimal precision
    fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.config.precision as i32);
        (value * factor).round() / factor
    }
}
