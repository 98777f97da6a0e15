//! Output for a finished run.
//!
//! Three forms:
//! - JSON: the machine-readable report file
//! - Spreadsheet: summary, dependency and parse-error sheets
//! - Pretty: colored terminal summary

use colored::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::aggregate::RunTotals;
use crate::error::{AnalyzeError, Result};
use crate::manifest::Dependencies;
use crate::parser::ParseError;

mod spreadsheet;

pub use spreadsheet::{build_sheets, write_spreadsheet, Cell, Sheet};

/// Finalized snapshot handed to the writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    pub totals: RunTotals,
    pub dependencies: Dependencies,
}

impl ProjectReport {
    pub fn new(totals: RunTotals, dependencies: Dependencies) -> Self {
        Self {
            totals,
            dependencies,
        }
    }
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure. Field names are part of the output format.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub total_files: usize,
    pub function_components: usize,
    pub class_components: usize,
    pub total_characters: usize,
    pub total_lines: usize,
    pub dependencies_count: usize,
    #[serde(rename = "devDependencies_count")]
    pub dev_dependencies_count: usize,
    pub dependencies: Vec<String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Vec<String>,
    pub parse_errors: Vec<ParseError>,
}

impl From<&ProjectReport> for JsonReport {
    fn from(report: &ProjectReport) -> Self {
        let totals = &report.totals;
        let deps = &report.dependencies;
        Self {
            total_files: totals.total_files,
            function_components: totals.function_components,
            class_components: totals.class_components,
            total_characters: totals.total_characters,
            total_lines: totals.total_lines,
            dependencies_count: deps.dependencies.len(),
            dev_dependencies_count: deps.dev_dependencies.len(),
            dependencies: deps.dependencies.clone(),
            dev_dependencies: deps.dev_dependencies.clone(),
            parse_errors: totals.parse_errors.clone(),
        }
    }
}

/// Render the JSON report (two-space indent).
pub fn to_json(report: &ProjectReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from(report))?)
}

/// Write the JSON report to `path`.
pub fn write_json(report: &ProjectReport, path: &Path) -> Result<()> {
    let json = to_json(report)?;
    std::fs::write(path, json).map_err(|source| AnalyzeError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Print a terminal summary of the run.
pub fn write_pretty(root: &str, report: &ProjectReport, outputs: &[&Path]) {
    let totals = &report.totals;
    let deps = &report.dependencies;

    println!();
    print!("  ");
    print!("{}", "project-analyzer".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanned: ".dimmed());
    println!("{}", root);
    println!();

    write_metric("Total Files", totals.total_files);
    write_metric("Function Components", totals.function_components);
    write_metric("Class Components", totals.class_components);
    write_metric("Total Characters", totals.total_characters);
    write_metric("Total Lines of Code", totals.total_lines);
    write_metric("Dependencies", deps.dependencies.len());
    write_metric("Dev Dependencies", deps.dev_dependencies.len());

    if !totals.parse_errors.is_empty() {
        println!(
            "    {} {:<22}{}",
            "WARN ".yellow(),
            "Parse Errors",
            totals.parse_errors.len().to_string().yellow()
        );
    }
    if totals.skipped_files > 0 {
        println!(
            "    {} {:<22}{}",
            "WARN ".yellow(),
            "Unreadable Files",
            totals.skipped_files.to_string().yellow()
        );
    }
    println!();

    if !totals.folders.is_empty() {
        println!("  {}", "Files by Root Folder:".bold());
        for (folder, count) in &totals.folders {
            println!("    {:<28} {:>6}", folder, count);
        }
        println!();
    }

    for output in outputs {
        print!("  {}", "Wrote: ".dimmed());
        println!("{}", output.display().to_string().blue());
    }
    println!();
}

fn write_metric(label: &str, value: usize) {
    println!("    {} {:<22}{}", "✓".green(), label, value.to_string().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample_report() -> ProjectReport {
        let mut totals = RunTotals::new();
        totals.total_files = 3;
        totals.function_components = 4;
        totals.class_components = 1;
        totals.total_characters = 512;
        totals.total_lines = 40;
        totals
            .parse_errors
            .push(ParseError::new(Path::new("src/broken.js"), "Missing `}` (9:0)"));

        ProjectReport::new(
            totals,
            Dependencies {
                dependencies: vec!["react".to_string(), "react-native".to_string()],
                dev_dependencies: vec!["jest".to_string()],
            },
        )
    }

    #[test]
    fn test_json_field_names() {
        let json = to_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        let keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "total_files",
                "function_components",
                "class_components",
                "total_characters",
                "total_lines",
                "dependencies_count",
                "devDependencies_count",
                "dependencies",
                "devDependencies",
                "parse_errors",
            ]
        );
        assert_eq!(value["devDependencies_count"], 1);
        assert_eq!(value["dependencies"][1], "react-native");
        assert_eq!(value["parse_errors"][0]["file"], "src/broken.js");
        assert_eq!(value["parse_errors"][0]["message"], "Missing `}` (9:0)");
    }

    #[test]
    fn test_json_is_indented() {
        let json = to_json(&sample_report()).unwrap();
        assert!(json.starts_with("{\n  \"total_files\": 3,"));
    }

    #[test]
    fn test_write_json_round_trip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("project_analysis.json");
        write_json(&sample_report(), &path).unwrap();

        let parsed: JsonReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.total_files, 3);
        assert_eq!(parsed.dependencies_count, 2);
        assert_eq!(parsed.parse_errors.len(), 1);
    }

    #[test]
    fn test_write_json_into_missing_dir_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("missing").join("out.json");
        let err = write_json(&sample_report(), &path).unwrap_err();
        assert!(matches!(err, AnalyzeError::Write { .. }));
    }
}
