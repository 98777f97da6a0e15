//! Path enumeration for a project tree.
//!
//! Two kinds of paths are collected in one walk:
//! - source files matching the configured extensions anywhere in the tree,
//! - every entry below a top-level platform directory (`ios`, `android`).
//!
//! Each kind has its own exclusion globs, matched against the path relative
//! to the root.

use globset::GlobSet;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::{build_globset, AnalyzerConfig};
use crate::error::Result;

/// Compiled collection rules.
struct CollectRules {
    source_extensions: Vec<String>,
    platform_dirs: Vec<String>,
    source_excludes: GlobSet,
    platform_excludes: GlobSet,
    /// Directory forms of the `dir/**` excludes, used to prune the walk.
    source_dir_excludes: GlobSet,
    platform_dir_excludes: GlobSet,
}

impl CollectRules {
    fn new(config: &AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            source_extensions: config.source_extensions.clone(),
            platform_dirs: config.platform_dirs.clone(),
            source_excludes: build_globset(&config.source_excludes)?,
            platform_excludes: build_globset(&config.platform_excludes)?,
            source_dir_excludes: build_globset(&dir_patterns(&config.source_excludes))?,
            platform_dir_excludes: build_globset(&dir_patterns(&config.platform_excludes))?,
        })
    }

    /// Whether `rel` lies strictly below a top-level platform directory.
    fn in_platform(&self, rel: &Path) -> bool {
        let mut components = rel.components();
        let top = match components.next() {
            Some(Component::Normal(name)) => name.to_string_lossy(),
            _ => return false,
        };
        components.next().is_some() && self.platform_dirs.iter().any(|d| *d == top)
    }

    fn is_source(&self, rel: &Path) -> bool {
        let matches_ext = rel
            .extension()
            .map(|e| {
                let ext = e.to_string_lossy();
                self.source_extensions.iter().any(|s| *s == ext)
            })
            .unwrap_or(false);
        matches_ext && !self.source_excludes.is_match(rel)
    }

    fn is_platform(&self, rel: &Path) -> bool {
        self.in_platform(rel)
            && !self.platform_excludes.is_match(rel)
            && !self.platform_dir_excludes.is_match(rel)
    }

    /// A directory is pruned when nothing below it can be collected.
    fn prune_dir(&self, rel: &Path) -> bool {
        self.source_dir_excludes.is_match(rel)
            && (!self.in_platform(rel) || self.platform_dir_excludes.is_match(rel))
    }
}

/// `foo/**` also names the directory `foo` itself.
fn dir_patterns(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .filter_map(|p| p.strip_suffix("/**"))
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Enumerate candidate paths under `root`.
///
/// Source files come first (walk order), then platform entries. Directories
/// below platform directories are listed too; the file filter drops them.
pub fn collect_paths(root: &Path, config: &AnalyzerConfig) -> Result<Vec<PathBuf>> {
    let rules = CollectRules::new(config)?;

    let mut sources = Vec::new();
    let mut platform = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if is_hidden(e) {
                return false;
            }
            if e.depth() > 0 && e.file_type().is_dir() {
                if let Ok(rel) = e.path().strip_prefix(root) {
                    return !rules.prune_dir(rel);
                }
            }
            true
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };

        if !entry.file_type().is_dir() && rules.is_source(rel) {
            sources.push(entry.path().to_path_buf());
        } else if rules.is_platform(rel) {
            platform.push(entry.path().to_path_buf());
        }
    }

    tracing::info!(
        sources = sources.len(),
        platform = platform.len(),
        "collected candidate paths"
    );

    sources.extend(platform);
    Ok(sources)
}
