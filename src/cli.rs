//! Command-line interface for project-analyzer.

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzeError, Result};
use crate::manifest::Dependencies;
use crate::report::{self, ProjectReport};
use crate::runner::Runner;
use crate::scan::{collect_paths, FileFilter};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

const PROGRESS_TEMPLATE: &str = "Analyzing [{bar:40}] {percent}% | {pos}/{len} files";

/// Size and structure report for a React Native project.
///
/// Walks the project's JavaScript and TypeScript sources plus the native
/// ios/ and android/ trees, counts files, characters, lines, function-like
/// declarations and class components, and writes a JSON report and a
/// spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "project-analyzer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root to analyze
    #[arg(long)]
    pub path: PathBuf,

    /// Directory the reports are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Path to config YAML file (default: auto-discover in the project root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Analyze files on a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Do not draw the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level selected by `-v` flags, if any.
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            _ => Some("debug"),
        }
    }
}

/// Options for a single analysis run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub parallel: bool,
    pub progress: bool,
}

/// Check that `path` exists and is a directory.
pub fn validate_root(path: &Path) -> Result<PathBuf> {
    let root = path
        .canonicalize()
        .map_err(|_| AnalyzeError::RootNotFound(path.to_path_buf()))?;
    if !root.is_dir() {
        return Err(AnalyzeError::NotADirectory(path.to_path_buf()));
    }
    Ok(root)
}

/// Collect, analyze and read the manifest of `root`.
pub fn analyze_root(
    root: &Path,
    config: &AnalyzerConfig,
    options: RunOptions,
) -> Result<ProjectReport> {
    tracing::info!(root = %root.display(), "collecting paths");
    let paths = collect_paths(root, config)?;
    tracing::info!(paths = paths.len(), "collected paths");

    let filter = FileFilter::new().with_ignored_extensions(config.ignored_extensions.iter());
    let mut runner = Runner::new(root).filter(filter).parallel(options.parallel);
    if options.progress {
        runner = runner.progress(progress_bar(paths.len() as u64));
    }

    let totals = runner.run(&paths);
    let dependencies = Dependencies::load(root);

    Ok(ProjectReport::new(totals, dependencies))
}

fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    match ProgressStyle::with_template(PROGRESS_TEMPLATE) {
        Ok(style) => bar.set_style(style.progress_chars("█░")),
        Err(e) => tracing::debug!(error = %e, "invalid progress template, using default"),
    }
    bar
}

/// Run the analyzer.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    let root = validate_root(&cli.path)?;
    let config = AnalyzerConfig::load(cli.config.as_deref(), &root)?;

    let report = analyze_root(
        &root,
        &config,
        RunOptions {
            parallel: cli.parallel,
            progress: !cli.no_progress,
        },
    )?;

    std::fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            cli.output_dir.display()
        )
    })?;
    let json_path = cli.output_dir.join(&config.output.json);
    let xlsx_path = cli.output_dir.join(&config.output.spreadsheet);

    report::write_json(&report, &json_path)?;
    report::write_spreadsheet(&report, &xlsx_path)?;
    tracing::info!(json = %json_path.display(), spreadsheet = %xlsx_path.display(), "reports written");

    let path_str = cli.path.to_string_lossy().to_string();
    report::write_pretty(&path_str, &report, &[json_path.as_path(), xlsx_path.as_path()]);

    Ok(EXIT_SUCCESS)
}
