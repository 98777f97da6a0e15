//! Selecting and loading the files of a project tree.
//!
//! - `collect`: enumerate candidate paths under the scan root
//! - `filter`: drop non-files and asset extensions
//! - `source`: read text and derive size metrics

mod collect;
mod filter;
mod source;

pub use collect::collect_paths;
pub use filter::{AnalysisTarget, FileFilter};
pub use source::{count_lines, SourceUnit};
