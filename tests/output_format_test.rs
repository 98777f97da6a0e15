//! Tests for the report formats.
//!
//! These tests verify the JSON keys and spreadsheet layout produced for the
//! testdata/sample-app fixture.

use std::path::PathBuf;

use project_analyzer::cli::{analyze_root, RunOptions};
use project_analyzer::config::AnalyzerConfig;
use project_analyzer::report::{self, build_sheets, Cell, JsonReport, ProjectReport};

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join("sample-app")
}

fn fixture_report() -> ProjectReport {
    analyze_root(&fixture_root(), &AnalyzerConfig::default(), RunOptions::default())
        .expect("analysis should succeed")
}

#[test]
fn test_json_report_values() {
    let report = fixture_report();
    let json = report::to_json(&report).expect("report should encode");
    let value: serde_json::Value = serde_json::from_str(&json).expect("report should be JSON");

    assert_eq!(value["total_files"], 7);
    assert_eq!(value["function_components"], 5);
    assert_eq!(value["class_components"], 2);
    assert_eq!(value["dependencies_count"], 2);
    assert_eq!(value["devDependencies_count"], 2);
    assert_eq!(value["dependencies"], serde_json::json!(["react", "react-native"]));
    assert_eq!(value["devDependencies"], serde_json::json!(["typescript", "jest"]));
    assert!(value["parse_errors"]
        .as_array()
        .expect("parse_errors should be an array")
        .iter()
        .any(|e| e["file"].as_str().is_some_and(|f| f.ends_with("broken.js"))));

    // console-only data stays out of the file
    assert!(value.get("skipped_files").is_none());
    assert!(value.get("folders").is_none());
}

#[test]
fn test_json_written_to_disk() {
    let out = tempfile::TempDir::new().expect("temp dir");
    let path = out.path().join("project_analysis.json");
    report::write_json(&fixture_report(), &path).expect("write should succeed");

    let parsed: JsonReport = serde_json::from_str(
        &std::fs::read_to_string(&path).expect("report should exist"),
    )
    .expect("report should decode");
    assert_eq!(parsed.total_files, 7);
    assert_eq!(parsed.dev_dependencies, vec!["typescript", "jest"]);
}

#[test]
fn test_summary_sheet_for_fixture() {
    let sheets = build_sheets(&fixture_report());
    let summary = &sheets[0];

    assert_eq!(summary.name, "Summary");
    assert_eq!(
        summary.rows[1],
        vec![Cell::Text("Total Files".to_string()), Cell::Number(7)]
    );
    assert_eq!(
        summary.rows[2],
        vec![Cell::Text("Function Components".to_string()), Cell::Number(5)]
    );
    assert_eq!(
        &summary.rows[10..],
        &[
            vec![Cell::Text("App.tsx".to_string()), Cell::Number(1)],
            vec![Cell::Text("android".to_string()), Cell::Number(1)],
            vec![Cell::Text("ios".to_string()), Cell::Number(1)],
            vec![Cell::Text("src".to_string()), Cell::Number(4)],
        ]
    );
}

#[test]
fn test_dependency_sheet_for_fixture() {
    let sheets = build_sheets(&fixture_report());
    let deps = &sheets[1];

    assert_eq!(deps.name, "Dependencies");
    assert_eq!(deps.rows.len(), 5);
    assert_eq!(
        deps.rows[4],
        vec![
            Cell::Text("devDependency".to_string()),
            Cell::Text("jest".to_string())
        ]
    );
}

#[test]
fn test_spreadsheet_written_to_disk() {
    let out = tempfile::TempDir::new().expect("temp dir");
    let path = out.path().join("project_analysis.xlsx");
    report::write_spreadsheet(&fixture_report(), &path).expect("write should succeed");
    assert!(std::fs::metadata(&path).expect("file should exist").len() > 0);
}
