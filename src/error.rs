//! Run-level errors.
//!
//! Per-file problems never show up here: syntax errors become
//! [`ParseError`](crate::parser::ParseError) values and unreadable files are
//! recorded as skipped. Everything in [`AnalyzeError`] stops the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an analysis run.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("path not found: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("reading config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid glob pattern {pattern:?}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("encoding JSON report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("writing spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
