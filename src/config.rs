//! Analyzer configuration.
//!
//! Every field has a default that reproduces the stock React Native layout,
//! so a config file is only needed to widen or narrow the scan.

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AnalyzeError, Result};

/// Config file names looked up in the scan root.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["project-analyzer.yaml", ".project-analyzer.yaml"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Extensions (without dot) collected anywhere in the tree.
    pub source_extensions: Vec<String>,
    /// Top-level directories whose every entry is collected.
    pub platform_dirs: Vec<String>,
    /// Globs (relative to the root) excluded from source collection.
    pub source_excludes: Vec<String>,
    /// Globs (relative to the root) excluded from platform collection.
    pub platform_excludes: Vec<String>,
    /// Extra extensions added to the built-in deny-list.
    pub ignored_extensions: Vec<String>,
    pub output: OutputConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            source_extensions: strings(&["js", "jsx", "ts", "tsx"]),
            platform_dirs: strings(&["ios", "android"]),
            source_excludes: strings(&["**/node_modules/**", "**/build/**", "**/dist/**"]),
            platform_excludes: strings(&[
                "ios/build/**",
                "ios/Pods/**",
                "android/.gradle/**",
                "android/build/**",
                "android/app/build/**",
            ]),
            ignored_extensions: Vec::new(),
            output: OutputConfig::default(),
        }
    }
}

/// Report file names, resolved against the output directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: String,
    pub spreadsheet: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: "project_analysis.json".to_string(),
            spreadsheet: "project_analysis.xlsx".to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl AnalyzerConfig {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AnalyzeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&content).map_err(|source| AnalyzeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config from YAML text. An empty document yields the defaults.
    pub fn parse_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load the explicit config if given, else a discovered one in `root`,
    /// else the defaults.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::parse_file(path)?,
            None => match discover(root) {
                Some(path) => {
                    tracing::info!(config = %path.display(), "using discovered config");
                    Self::parse_file(path)?
                }
                None => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the config can drive a scan.
    pub fn validate(&self) -> Result<()> {
        if self.source_extensions.is_empty() {
            return Err(AnalyzeError::InvalidConfig(
                "source_extensions must not be empty".to_string(),
            ));
        }
        if self
            .source_extensions
            .iter()
            .chain(&self.ignored_extensions)
            .any(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(AnalyzeError::InvalidConfig(
                "extensions must be non-empty and written without a leading dot".to_string(),
            ));
        }
        if self.output.json.is_empty() || self.output.spreadsheet.is_empty() {
            return Err(AnalyzeError::InvalidConfig(
                "output file names must not be empty".to_string(),
            ));
        }
        build_globset(&self.source_excludes)?;
        build_globset(&self.platform_excludes)?;
        Ok(())
    }
}

/// Find a config file in the scan root.
pub fn discover(root: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Compile glob patterns into one matcher.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| AnalyzeError::Glob {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| AnalyzeError::Glob {
        pattern: patterns.join(", "),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_validate() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.json, "project_analysis.json");
        assert_eq!(config.platform_dirs, vec!["ios", "android"]);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
ignored_extensions: [svg, mp4]
output:
  json: metrics.json
"#;
        let config = AnalyzerConfig::parse_str(yaml).unwrap();
        assert_eq!(config.ignored_extensions, vec!["svg", "mp4"]);
        assert_eq!(config.output.json, "metrics.json");
        assert_eq!(config.output.spreadsheet, "project_analysis.xlsx");
        assert_eq!(config.source_extensions.len(), 4);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = AnalyzerConfig::parse_str("  \n").unwrap();
        assert_eq!(config.source_excludes.len(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_glob() {
        let config = AnalyzerConfig {
            source_excludes: vec!["src/[".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AnalyzeError::Glob { .. }));
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let config = AnalyzerConfig {
            ignored_extensions: vec![".svg".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalyzeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_discover_in_root() {
        let temp = TempDir::new().unwrap();
        assert!(discover(temp.path()).is_none());

        std::fs::write(
            temp.path().join(".project-analyzer.yaml"),
            "platform_dirs: [ios]\n",
        )
        .unwrap();

        let config = AnalyzerConfig::load(None, temp.path()).unwrap();
        assert_eq!(config.platform_dirs, vec!["ios"]);
    }

    #[test]
    fn test_load_reports_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yaml");
        std::fs::write(&path, "source_extensions: {").unwrap();

        let err = AnalyzerConfig::load(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, AnalyzeError::ConfigParse { .. }));
    }
}
