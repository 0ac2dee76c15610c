//! End-to-end workflow tests
//!
//! Full pipeline runs against real data files: load, analyze, display and
//! persist, with the persisted artifacts checked for exact contents.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn create_test_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dsa").unwrap();
    cmd.current_dir(work_dir.path());
    cmd.env("NO_COLOR", "1");
    for var in ["PRECISION", "OUTPUT_FORMAT", "ANALYSIS_MODE", "INCLUDE_OUTLIERS", "OUTPUT_DIR"] {
        cmd.env_remove(var);
    }
    cmd
}

fn write_dataset(work_dir: &TempDir, name: &str, content: &str) -> String {
    let path = work_dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn load_results(work_dir: &TempDir) -> serde_json::Map<String, serde_json::Value> {
    let content = fs::read_to_string(work_dir.path().join("output/analysis_results.json")).unwrap();
    serde_json::from_str::<serde_json::Value>(&content)
        .unwrap()
        .as_object()
        .unwrap()
        .clone()
}

#[test]
fn test_reference_dataset_basic_stats() {
    let work_dir = TempDir::new().unwrap();
    let data = write_dataset(&work_dir, "data.json", "[10.0, 20.0, 30.0, 40.0, 50.0]");

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 5 data points"))
        .stdout(predicate::str::contains("Analysis complete! Generated 7 metrics."));

    let results = load_results(&work_dir);
    assert_eq!(results["count"], 5);
    assert_eq!(results["mean"], 30.0);
    assert_eq!(results["median"], 30.0);
    assert_eq!(results["min"], 10.0);
    assert_eq!(results["max"], 50.0);
    assert_eq!(results["std_dev"], 15.81);
    assert_eq!(results["variance"], 250.0);
}

#[test]
fn test_single_element_dataset() {
    let work_dir = TempDir::new().unwrap();
    let data = write_dataset(&work_dir, "one.json", "[42.0]");

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("42.00"))
        .stdout(predicate::str::contains("Std Dev").not());

    let results = load_results(&work_dir);
    assert_eq!(results["count"], 1);
    assert_eq!(results["mean"], 42.0);
    assert_eq!(results["median"], 42.0);
    assert_eq!(results["min"], 42.0);
    assert_eq!(results["max"], 42.0);
    assert!(!results.contains_key("std_dev"));
    assert!(!results.contains_key("variance"));
}

#[test]
fn test_empty_dataset_exits_nonzero() {
    let work_dir = TempDir::new().unwrap();
    let data = write_dataset(&work_dir, "empty.json", "[]");

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .assert()
        .failure()
        .stdout(predicate::str::contains("No results to display"))
        .stdout(predicate::str::contains("No results to save"));

    assert!(!work_dir.path().join("output/analysis_results.json").exists());
}

#[test]
fn test_advanced_stats_on_one_to_hundred() {
    let work_dir = TempDir::new().unwrap();
    let values: Vec<String> = (1..=100).map(|x| x.to_string()).collect();
    let data = write_dataset(&work_dir, "range.json", &format!("[{}]", values.join(",")));

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .arg("--mode")
        .arg("advanced")
        .assert()
        .success();

    let results = load_results(&work_dir);
    assert_eq!(results["p25"], 26.0);
    assert_eq!(results["p50"], 51.0);
    assert_eq!(results["p75"], 76.0);
    assert_eq!(results["p90"], 91.0);
    assert_eq!(results["p95"], 96.0);
    assert_eq!(results["iqr"], 50.0);
    assert_eq!(results["outlier_count"], 0);
}

#[test]
fn test_outliers_detected_beyond_iqr_fences() {
    let work_dir = TempDir::new().unwrap();
    let data = write_dataset(&work_dir, "outliers.json", "[1, 2, 3, 4, 5, 6, 7, 8, 9, 100]");

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .arg("--mode")
        .arg("detailed")
        .assert()
        .success();

    let results = load_results(&work_dir);
    assert_eq!(results["outlier_count"], 1);
    assert_eq!(results["outlier_percentage"], 10.0);
}

#[test]
fn test_small_dataset_skips_advanced_stats() {
    let work_dir = TempDir::new().unwrap();
    let data = write_dataset(&work_dir, "small.json", "[1.0, 2.0, 3.0]");

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .arg("--mode")
        .arg("advanced")
        .assert()
        .success();

    let results = load_results(&work_dir);
    assert!(results.contains_key("mean"));
    assert!(!results.contains_key("p25"));
    assert!(!results.contains_key("iqr"));
}

#[test]
fn test_non_numeric_entries_are_filtered() {
    let work_dir = TempDir::new().unwrap();
    let data = write_dataset(
        &work_dir,
        "mixed.json",
        r#"[10, "invalid", 20, null, 30, "", 40]"#,
    );

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 4 data points"));

    let results = load_results(&work_dir);
    assert_eq!(results["count"], 4);
    assert_eq!(results["mean"], 25.0);
}

#[test]
fn test_malformed_file_falls_back_to_sample() {
    let work_dir = TempDir::new().unwrap();
    let data = write_dataset(&work_dir, "broken.json", "{not valid json");

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 50 data points"))
        .stderr(predicate::str::contains("Using sample data"));
}

#[test]
fn test_missing_file_falls_back_to_sample() {
    let work_dir = TempDir::new().unwrap();

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg("does_not_exist.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 50 data points"))
        .stderr(predicate::str::contains("Using sample data"));
}

#[test]
fn test_csv_output_layout() {
    let work_dir = TempDir::new().unwrap();
    let data = write_dataset(&work_dir, "data.json", "[10.0, 20.0, 30.0, 40.0, 50.0]");

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .arg("--output-format")
        .arg("csv")
        .assert()
        .success();

    let content = fs::read_to_string(work_dir.path().join("output/analysis_results.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "metric,value");
    assert_eq!(lines[1], "count,5");
    assert_eq!(lines[2], "mean,30.0");
    assert_eq!(lines[3], "median,30.0");
    assert_eq!(lines[4], "min,10.0");
    assert_eq!(lines[5], "max,50.0");
}

#[test]
fn test_saved_json_round_trips_against_second_run() {
    let work_dir = TempDir::new().unwrap();
    let data = write_dataset(&work_dir, "data.json", "[10.0, 20.0, 30.0, 40.0, 50.0]");

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .arg("--mode")
        .arg("advanced")
        .assert()
        .success();
    let first = load_results(&work_dir);

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .arg("--mode")
        .arg("advanced")
        .assert()
        .success();
    let second = load_results(&work_dir);

    assert_eq!(first, second);
}

#[test]
fn test_create_sample_then_analyze_it() {
    let work_dir = TempDir::new().unwrap();

    create_test_cmd(&work_dir)
        .arg("--create-sample")
        .assert()
        .success();

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg("data/sample_dataset.json")
        .arg("--mode")
        .arg("advanced")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 30 data points"))
        .stdout(predicate::str::contains("Analysis complete!"));

    let results = load_results(&work_dir);
    assert_eq!(results["count"], 30);
    assert!(results.contains_key("p90"));
}

#[test]
fn test_include_outliers_env_gate() {
    let work_dir = TempDir::new().unwrap();
    let data = write_dataset(&work_dir, "data.json", "[1, 2, 3, 4, 5, 6, 7, 8, 9, 100]");

    create_test_cmd(&work_dir)
        .arg("--data")
        .arg(&data)
        .arg("--mode")
        .arg("advanced")
        .env("INCLUDE_OUTLIERS", "false")
        .assert()
        .success();

    let results = load_results(&work_dir);
    assert!(results.contains_key("p25"));
    assert!(!results.contains_key("outlier_count"));
    assert!(!results.contains_key("outlier_percentage"));
}
