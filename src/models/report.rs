//! Analysis report data model
//!
//! A report is an insertion-ordered mapping from metric name to value.
//! Insertion order is significant: CSV rows and the JSON object are emitted
//! in the order metrics were computed.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single metric value, either an integer count or a measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Integer-valued metrics such as `count` and `outlier_count`
    Count(u64),
    /// Floating-point metrics
    Number(f64),
}

impl MetricValue {
    /// Numeric view of the value regardless of variant
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Count(n) => *n as f64,
            MetricValue::Number(x) => *x,
        }
    }

    /// Whether this value is the integer variant
    pub fn is_count(&self) -> bool {
        matches!(self, MetricValue::Count(_))
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        MetricValue::Count(value)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{}", n),
            MetricValue::Number(x) => write!(f, "{}", x),
        }
    }
}

/// Insertion-ordered collection of named metrics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    entries: Vec<(String, MetricValue)>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a metric. An existing metric keeps its position;
    /// a new one is appended.
    pub fn insert<V: Into<MetricValue>>(&mut self, name: &str, value: V) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Look up a metric by name
    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Numeric value of a metric, if present
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).map(MetricValue::as_f64)
    }

    /// Whether a metric with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of metrics in the report
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate metrics in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Merge another report into this one, preserving positions of
    /// already-present metrics
    pub fn merge(&mut self, other: Report) {
        for (name, value) in other.entries {
            self.insert(&name, value);
        }
    }

    /// Remove all metrics
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Report {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ReportVisitor;

        impl<'de> Visitor<'de> for ReportVisitor {
            type Value = Report;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of metric names to numeric values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Report, A::Error> {
                let mut report = Report::new();
                while let Some((name, value)) = access.next_entry::<String, MetricValue>()? {
                    report.insert(&name, value);
                }
                Ok(report)
            }
        }

        deserializer.deserialize_map(ReportVisitor)
    }
}
