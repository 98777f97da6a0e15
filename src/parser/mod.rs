//! Syntax parsing for JavaScript and TypeScript sources.
//!
//! This module provides:
//! - `Dialect`: which tree-sitter grammar a file is parsed with
//! - `ScriptParser`: parses source text into a `SyntaxTree`
//! - `ParseError`: the recorded, non-fatal failure for one file
//!
//! Tree-sitter never refuses input; it recovers by inserting ERROR and
//! MISSING nodes. Any such node turns the parse into a `ParseError`, so a
//! tree handed to the classifier is always complete.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod treesitter;

pub use treesitter::ScriptParser;

/// Grammar used for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// TypeScript with JSX. Also accepts plain modern JavaScript.
    Tsx,
    /// TypeScript without JSX, so `<T>value` casts parse.
    TypeScript,
}

impl Dialect {
    /// Pick the dialect from the file extension.
    pub fn for_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "ts" | "mts" | "cts" => Dialect::TypeScript,
            _ => Dialect::Tsx,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Tsx => "tsx",
            Dialect::TypeScript => "typescript",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A file the grammar could not accept.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{file}: {message}")]
pub struct ParseError {
    pub file: String,
    pub message: String,
}

impl ParseError {
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            file: path.display().to_string(),
            message: message.into(),
        }
    }
}

/// A complete parse of one source text.
#[derive(Debug)]
pub struct SyntaxTree<'src> {
    tree: tree_sitter::Tree,
    source: &'src str,
    dialect: Dialect,
}

impl<'src> SyntaxTree<'src> {
    pub(crate) fn new(tree: tree_sitter::Tree, source: &'src str, dialect: Dialect) -> Self {
        Self {
            tree,
            source,
            dialect,
        }
    }

    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Get text for a node.
    pub fn node_text(&self, node: tree_sitter::Node) -> &'src str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}
