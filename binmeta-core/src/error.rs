//! Error types for BinMeta core operations.

use thiserror::Error;

/// Core error type for BinMeta operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Dictionary line does not carry a candidate name.
    #[error("malformed dictionary line {line}: expected '<token> <name>', found '{content}'")]
    MalformedDictionaryLine {
        /// 1-based line number.
        line: usize,
        /// Offending line content.
        content: String,
    },
}

impl Error {
    /// Creates a malformed dictionary line error.
    pub fn malformed_line(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedDictionaryLine {
            line,
            content: content.into(),
        }
    }
}

/// Result type alias for BinMeta core operations.
pub type Result<T> = std::result::Result<T, Error>;
