//! Dependency lists from the project's `package.json`.

use serde::Deserialize;
use std::path::Path;

/// Runtime and development dependency names, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

#[derive(Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Dependencies {
    /// Read `<root>/package.json`. A missing or malformed manifest yields
    /// empty lists and a warning.
    pub fn load(root: &Path) -> Self {
        let path = root.join("package.json");
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(manifest = %path.display(), error = %e, "package.json not readable, no dependencies reported");
                return Self::default();
            }
        };
        match Self::parse(&content) {
            Ok(deps) => deps,
            Err(e) => {
                tracing::warn!(manifest = %path.display(), error = %e, "package.json is malformed, no dependencies reported");
                Self::default()
            }
        }
    }

    /// Parse manifest text.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        let manifest: PackageJson = serde_json::from_str(content)?;
        let names = |map: Option<serde_json::Map<String, serde_json::Value>>| {
            map.map(|m| m.keys().cloned().collect()).unwrap_or_default()
        };
        Ok(Self {
            dependencies: names(manifest.dependencies),
            dev_dependencies: names(manifest.dev_dependencies),
        })
    }
}
