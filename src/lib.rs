//! project-analyzer - size and structure report for React Native projects.
//!
//! Walks a project's JavaScript/TypeScript sources and its native `ios/` and
//! `android/` trees, then reports file, character and line totals, counts of
//! function-like declarations and class components, the `package.json`
//! dependency lists, and the files that failed to parse.
//!
//! # Architecture
//!
//! - `scan`: path collection, the extension deny-list, source loading
//! - `parser`: tree-sitter parsing (TSX and TypeScript grammars)
//! - `classify`: structural pattern rules over a syntax tree
//! - `runner`: per-file pipeline, sequential or on the rayon pool
//! - `aggregate`: per-file outcomes folded into run totals
//! - `manifest`: dependency lists from `package.json`
//! - `report`: JSON, spreadsheet and terminal output
//! - `config`: optional YAML configuration

pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod parser;
pub mod report;
pub mod runner;
pub mod scan;

pub use aggregate::{FileAnalysis, FileOutcome, RunTotals};
pub use classify::{classify, ClassificationCounts};
pub use config::AnalyzerConfig;
pub use error::{AnalyzeError, Result};
pub use manifest::Dependencies;
pub use parser::{Dialect, ParseError, ScriptParser, SyntaxTree};
pub use report::{JsonReport, ProjectReport};
pub use runner::Runner;
pub use scan::{collect_paths, AnalysisTarget, FileFilter, SourceUnit};
