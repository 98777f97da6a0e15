//! Source loading and size metrics.

use std::path::Path;

/// The text of one file plus its size metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub text: String,
    pub characters: usize,
    pub lines: usize,
}

impl SourceUnit {
    /// Read `path`, replacing invalid UTF-8 sequences.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        Ok(Self::from_text(text))
    }

    /// `characters` counts UTF-16 code units, so a non-BMP character such as
    /// an emoji counts twice.
    pub fn from_text(text: String) -> Self {
        let characters = text.encode_utf16().count();
        let lines = count_lines(&text);
        Self {
            text,
            characters,
            lines,
        }
    }
}

/// Number of segments produced by splitting on `\r?\n`.
///
/// Every such break ends in a line feed, so splitting on `\n` alone yields the
/// same segment count. Empty text is one segment; text ending in a break has a
/// trailing empty segment.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}
