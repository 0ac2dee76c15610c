//! Dataset acquisition
//!
//! Loads numeric datasets from JSON array files, filters out non-numeric
//! entries, and falls back to the built-in sample dataset whenever a file
//! cannot be used. Loading never fails the run.

use crate::error::{AppError, Result};
use crate::logging::Logger;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a dataset from an optional JSON file path.
///
/// A missing, unreadable or malformed file produces a console warning and
/// the built-in sample dataset. Non-numeric entries in a valid JSON array
/// are filtered out.
pub fn load_dataset(file_path: Option<&Path>, logger: &Logger) -> Vec<f64> {
    let path = match file_path {
        Some(path) => path,
        None => return sample_dataset(),
    };

    match load_from_file(path, logger) {
        Ok(data) => data,
        Err(e) => {
            logger.warn(&format!(
                "Error loading data from {}: {}. Using sample data",
                path.display(),
                e
            ));
            sample_dataset()
        }
    }
}

/// The built-in sample dataset
pub fn sample_dataset() -> Vec<f64> {
    crate::defaults::SAMPLE_DATASET.to_vec()
}

/// Parse a JSON array file, keeping only numeric entries
fn load_from_file(path: &Path, logger: &Logger) -> Result<Vec<f64>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("failed to read file: {}", e)))?;

    let parsed: Value = serde_json::from_str(&content)?;
    let items = parsed
        .as_array()
        .ok_or_else(|| AppError::parse("expected a JSON array of numbers"))?;

    let mut data = Vec::with_capacity(items.len());
    for item in items {
        match item.as_f64() {
            Some(value) => data.push(value),
            None => logger.debug(&format!("Filtered out non-numeric item: {}", item)),
        }
    }

    Ok(data)
}

/// Write the sample dataset file under `base_dir` (CLI `--create-sample`).
/// Creates the data directory if needed and returns the written path.
pub fn create_sample_file(base_dir: &Path) -> Result<PathBuf> {
    let path = base_dir.join(crate::defaults::SAMPLE_FILE);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::io(format!("failed to create data directory: {}", e)))?;
    }

    let content = serde_json::to_string_pretty(crate::defaults::SAMPLE_FILE_DATASET)?;
    fs::write(&path, content)
        .map_err(|e| AppError::io(format!("failed to write sample data file: {}", e)))?;

    Ok(path)
}
