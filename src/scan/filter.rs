//! Decides which collected paths are analyzed at all.

use std::path::{Path, PathBuf};

/// Asset and build-config extensions that are never analyzed.
static IGNORED_EXTENSIONS: phf::Set<&'static str> = phf::phf_set! {
    "png",
    "wav",
    "ttf",
    "plist",
    "storyboard",
    "xcworkspacedata",
    "xcscheme",
    "xcuserstate",
    "keystore",
    "jar",
    "lock",
    "bzl",
    "properties",
};

/// A file that passed the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTarget {
    pub path: PathBuf,
    /// Lowercased extension without the dot; empty when the file has none.
    pub extension: String,
}

/// Extension deny-list filter. Unknown extensions are included.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    extra_ignored: Vec<String>,
}

impl FileFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add extensions on top of the built-in deny-list.
    pub fn with_ignored_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_ignored.extend(
            extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_lowercase()),
        );
        self
    }

    /// Whether `extension` (any case, no dot) is on the deny-list.
    pub fn is_ignored_extension(&self, extension: &str) -> bool {
        let ext = extension.to_lowercase();
        IGNORED_EXTENSIONS.contains(ext.as_str()) || self.extra_ignored.contains(&ext)
    }

    /// Return a target for `path` unless it is not a regular file or its
    /// extension is ignored.
    pub fn check(&self, path: &Path) -> Option<AnalysisTarget> {
        let is_file = std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            return None;
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if self.is_ignored_extension(&extension) {
            return None;
        }

        Some(AnalysisTarget {
            path: path.to_path_buf(),
            extension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_source_files_included() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("App.tsx");
        std::fs::write(&path, "export default null;").unwrap();

        let target = FileFilter::new().check(&path).unwrap();
        assert_eq!(target.extension, "tsx");
        assert_eq!(target.path, path);
    }

    #[test]
    fn test_ignored_extension_any_case() {
        let temp = TempDir::new().unwrap();
        let lower = temp.path().join("icon.png");
        let upper = temp.path().join("Splash.PNG");
        std::fs::write(&lower, "x").unwrap();
        std::fs::write(&upper, "x").unwrap();

        let filter = FileFilter::new();
        assert!(filter.check(&lower).is_none());
        assert!(filter.check(&upper).is_none());
    }

    #[test]
    fn test_unknown_extension_fails_open() {
        let temp = TempDir::new().unwrap();
        let gradle = temp.path().join("build.gradle");
        let bare = temp.path().join("Podfile");
        std::fs::write(&gradle, "apply plugin").unwrap();
        std::fs::write(&bare, "target 'App'").unwrap();

        let filter = FileFilter::new();
        assert_eq!(filter.check(&gradle).unwrap().extension, "gradle");
        assert_eq!(filter.check(&bare).unwrap().extension, "");
    }

    #[test]
    fn test_directories_and_missing_paths_excluded() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("ios.js");
        std::fs::create_dir(&dir).unwrap();

        let filter = FileFilter::new();
        assert!(filter.check(&dir).is_none());
        assert!(filter.check(&temp.path().join("gone.js")).is_none());
    }

    #[test]
    fn test_extra_ignored_extensions() {
        let filter = FileFilter::new().with_ignored_extensions([".SVG", "mp4"]);
        assert!(filter.is_ignored_extension("svg"));
        assert!(filter.is_ignored_extension("MP4"));
        assert!(filter.is_ignored_extension("lock"));
        assert!(!filter.is_ignored_extension("js"));
    }
}
