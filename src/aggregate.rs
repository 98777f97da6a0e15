//! Whole-run accumulation of per-file results.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::classify::ClassificationCounts;
use crate::parser::ParseError;

/// Dependency directory, never tallied as a top-level folder.
const DEPENDENCY_DIR: &str = "node_modules";

/// Result of analyzing one filtered-in file.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Analyzed(FileAnalysis),
    /// The file could not be read; it contributes to no total.
    Unreadable { path: PathBuf, error: String },
}

/// Size metrics and structure of one readable file.
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    pub path: PathBuf,
    /// First path segment relative to the scan root.
    pub top_level: Option<String>,
    pub characters: usize,
    pub lines: usize,
    pub structure: Result<ClassificationCounts, ParseError>,
}

/// Accumulated totals for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    pub total_files: usize,
    pub function_components: usize,
    pub class_components: usize,
    pub total_characters: usize,
    pub total_lines: usize,
    pub parse_errors: Vec<ParseError>,
    /// Files per top-level folder, in name order.
    pub folders: BTreeMap<String, usize>,
    /// Files that could not be read.
    pub skipped_files: usize,
}

impl RunTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file into the totals.
    ///
    /// Size metrics and the folder tally are taken for every readable file;
    /// structural counts only when the file parsed.
    pub fn record(&mut self, outcome: FileOutcome) {
        let analysis = match outcome {
            FileOutcome::Analyzed(analysis) => analysis,
            FileOutcome::Unreadable { path, error } => {
                tracing::warn!(file = %path.display(), %error, "skipping unreadable file");
                self.skipped_files += 1;
                return;
            }
        };

        self.total_files += 1;
        self.total_characters += analysis.characters;
        self.total_lines += analysis.lines;

        if let Some(folder) = analysis.top_level {
            if !folder.is_empty() && folder != DEPENDENCY_DIR {
                *self.folders.entry(folder).or_insert(0) += 1;
            }
        }

        match analysis.structure {
            Ok(counts) => {
                self.function_components += counts.function_like;
                self.class_components += counts.class_components;
            }
            Err(error) => self.parse_errors.push(error),
        }
    }

    /// Append another accumulator; its parse errors go after ours.
    pub fn merge(&mut self, other: RunTotals) {
        self.total_files += other.total_files;
        self.function_components += other.function_components;
        self.class_components += other.class_components;
        self.total_characters += other.total_characters;
        self.total_lines += other.total_lines;
        self.parse_errors.extend(other.parse_errors);
        for (folder, count) in other.folders {
            *self.folders.entry(folder).or_insert(0) += count;
        }
        self.skipped_files += other.skipped_files;
    }

    pub fn parse_error_count(&self) -> usize {
        self.parse_errors.len()
    }
}

impl FromIterator<FileOutcome> for RunTotals {
    fn from_iter<I: IntoIterator<Item = FileOutcome>>(iter: I) -> Self {
        let mut totals = RunTotals::new();
        for outcome in iter {
            totals.record(outcome);
        }
        totals
    }
}

/// First component of `path` relative to `root`.
///
/// A file directly under the root yields its own name. Paths outside the root
/// yield `None`.
pub fn top_level_segment(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    match rel.components().next()? {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}
