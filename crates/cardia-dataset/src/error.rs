//! Dataset source error types.

use std::path::PathBuf;

use cardia_core::errors::ErrorCategory;
use thiserror::Error;

/// Errors from reading a tabular dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The path does not exist.
    #[error("Dataset not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// No bytes, whitespace only, or a header without data rows.
    #[error("Dataset is empty")]
    Empty,

    /// The file is not well-formed CSV or lacks a required column.
    #[error("Dataset is malformed at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    /// A row failed schema validation and the policy is to reject the load.
    #[error("Dataset row at line {line} is invalid: {reason}")]
    InvalidRow { line: u64, reason: String },

    /// Any other read failure.
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        ErrorCategory::Source
    }
}

impl From<csv::Error> for SourceError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map_or(0, csv::Position::line);
        match error.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Self::Malformed {
                line,
                reason: format!("expected {expected_len} fields, found {len}"),
            },
            csv::ErrorKind::Utf8 { err, .. } => Self::Malformed {
                line,
                reason: format!("invalid UTF-8: {err}"),
            },
            other => Self::Malformed {
                line,
                reason: format!("{other:?}"),
            },
        }
    }
}
