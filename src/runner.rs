//! Per-file pipeline and the run loop.

use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::aggregate::{top_level_segment, FileAnalysis, FileOutcome, RunTotals};
use crate::classify::classify;
use crate::parser::ScriptParser;
use crate::scan::{AnalysisTarget, FileFilter, SourceUnit};

/// Runs filter, load, parse and classify over a list of paths and folds the
/// results into [`RunTotals`].
pub struct Runner {
    root: PathBuf,
    filter: FileFilter,
    parser: &'static ScriptParser,
    progress: Option<ProgressBar>,
    parallel: bool,
}

impl Runner {
    /// Create a runner for paths under `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            filter: FileFilter::new(),
            parser: ScriptParser::shared(),
            progress: None,
            parallel: false,
        }
    }

    /// Replace the default file filter.
    pub fn filter(mut self, filter: FileFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Advance `progress` once per path.
    pub fn progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Analyze files on the rayon pool. Folding stays in input order.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Analyze `paths` and return the totals.
    pub fn run(&self, paths: &[PathBuf]) -> RunTotals {
        tracing::info!(
            paths = paths.len(),
            parallel = self.parallel,
            "analyzing files"
        );

        let totals: RunTotals = if self.parallel {
            let outcomes: Vec<Option<FileOutcome>> =
                paths.par_iter().map(|p| self.step(p)).collect();
            outcomes.into_iter().flatten().collect()
        } else {
            let mut totals = RunTotals::new();
            for path in paths {
                if let Some(outcome) = self.step(path) {
                    totals.record(outcome);
                }
            }
            totals
        };

        if let Some(progress) = &self.progress {
            progress.finish();
        }
        totals
    }

    fn step(&self, path: &Path) -> Option<FileOutcome> {
        let outcome = self.analyze_path(path);
        if let Some(progress) = &self.progress {
            progress.inc(1);
        }
        outcome
    }

    /// Analyze one path. `None` when the file filter excludes it.
    pub fn analyze_path(&self, path: &Path) -> Option<FileOutcome> {
        let target = self.filter.check(path)?;
        Some(self.analyze_target(&target))
    }

    /// Load, parse and classify one target.
    pub fn analyze_target(&self, target: &AnalysisTarget) -> FileOutcome {
        let source = match SourceUnit::load(&target.path) {
            Ok(source) => source,
            Err(e) => {
                return FileOutcome::Unreadable {
                    path: target.path.clone(),
                    error: e.to_string(),
                }
            }
        };

        let structure = self
            .parser
            .parse(&target.path, &source.text)
            .map(|tree| classify(&tree));

        match &structure {
            Ok(counts) => tracing::debug!(
                file = %target.path.display(),
                functions = counts.function_like,
                classes = counts.class_components,
                "classified"
            ),
            Err(e) => tracing::debug!(file = %target.path.display(), error = %e.message, "parse failed"),
        }

        FileOutcome::Analyzed(FileAnalysis {
            path: target.path.clone(),
            top_level: top_level_segment(&self.root, &target.path),
            characters: source.characters,
            lines: source.lines,
            structure,
        })
    }
}
