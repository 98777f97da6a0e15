//! Spreadsheet report.
//!
//! The row model is built first and written in a second step, so the sheet
//! layout can be checked without opening a workbook.

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;

use super::ProjectReport;
use crate::error::{AnalyzeError, Result};

/// One cell of a sheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(u64),
    Empty,
}

impl Cell {
    fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    fn count(n: usize) -> Self {
        Cell::Number(n as u64)
    }
}

/// A named sheet, header row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: &'static str,
    pub rows: Vec<Vec<Cell>>,
}

/// Build the Summary, Dependencies and Parse Errors sheets, in that order.
pub fn build_sheets(report: &ProjectReport) -> Vec<Sheet> {
    vec![summary_sheet(report), dependency_sheet(report), error_sheet(report)]
}

fn summary_sheet(report: &ProjectReport) -> Sheet {
    let totals = &report.totals;
    let deps = &report.dependencies;

    let metric = |label: &str, value: usize| vec![Cell::text(label), Cell::count(value)];
    let mut rows = vec![
        vec![Cell::text("Metric"), Cell::text("Value")],
        metric("Total Files", totals.total_files),
        metric("Function Components", totals.function_components),
        metric("Class Components", totals.class_components),
        metric("Total Characters", totals.total_characters),
        metric("Total Lines of Code", totals.total_lines),
        metric("Dependencies", deps.dependencies.len()),
        metric("Dev Dependencies", deps.dev_dependencies.len()),
        vec![Cell::Empty, Cell::Empty],
        vec![Cell::text("Files by Root Folder"), Cell::text("Count")],
    ];
    rows.extend(
        totals
            .folders
            .iter()
            .map(|(folder, count)| vec![Cell::text(folder.as_str()), Cell::count(*count)]),
    );

    Sheet {
        name: "Summary",
        rows,
    }
}

fn dependency_sheet(report: &ProjectReport) -> Sheet {
    let deps = &report.dependencies;
    let mut rows = vec![vec![Cell::text("Dependency Type"), Cell::text("Name")]];
    rows.extend(
        deps.dependencies
            .iter()
            .map(|name| vec![Cell::text("dependency"), Cell::text(name.as_str())]),
    );
    rows.extend(
        deps.dev_dependencies
            .iter()
            .map(|name| vec![Cell::text("devDependency"), Cell::text(name.as_str())]),
    );

    Sheet {
        name: "Dependencies",
        rows,
    }
}

fn error_sheet(report: &ProjectReport) -> Sheet {
    let mut rows = vec![vec![Cell::text("File"), Cell::text("Error Message")]];
    rows.extend(
        report
            .totals
            .parse_errors
            .iter()
            .map(|e| vec![Cell::text(e.file.as_str()), Cell::text(e.message.as_str())]),
    );

    Sheet {
        name: "Parse Errors",
        rows,
    }
}

/// Write the workbook to `path`.
pub fn write_spreadsheet(report: &ProjectReport, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    for sheet in build_sheets(report) {
        let worksheet = workbook.add_worksheet();
        fill_worksheet(worksheet, &sheet)?;
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(AnalyzeError::Write {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "output directory does not exist",
                ),
            });
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn fill_worksheet(worksheet: &mut Worksheet, sheet: &Sheet) -> std::result::Result<(), XlsxError> {
    worksheet.set_name(sheet.name)?;
    for (r, row) in sheet.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(r, c, text.as_str())?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(r, c, *n as f64)?;
                }
                Cell::Empty => {}
            }
        }
    }
    Ok(())
}
