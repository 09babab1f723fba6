//! Database error types for cardia-db.

use std::fmt;

use cardia_core::errors::{ErrorCategory, ValidationError};
use thiserror::Error;

/// Which integrity rule a rejected write broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
    NotNull,
}

impl ConstraintKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unique => "unique",
            Self::ForeignKey => "foreign_key",
            Self::Check => "check",
            Self::NotNull => "not_null",
        }
    }

    /// Short user-facing explanation.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Unique => "identifier must be unique",
            Self::ForeignKey => "referenced record does not exist or is still referenced",
            Self::Check => "value is outside the allowed range",
            Self::NotNull => "required value is missing",
        }
    }

    /// Classify a `SQLite` error message such as
    /// `UNIQUE constraint failed: students.email`.
    #[must_use]
    pub fn from_message(message: &str) -> Option<Self> {
        if !message.contains("constraint failed") {
            return None;
        }
        let kind = if message.contains("UNIQUE") || message.contains("PRIMARY KEY") {
            Self::Unique
        } else if message.contains("FOREIGN KEY") {
            Self::ForeignKey
        } else if message.contains("NOT NULL") {
            Self::NotNull
        } else {
            Self::Check
        };
        Some(kind)
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned unusable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., wrong store for the operation).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A record addressed by id does not exist.
    #[error("No record found in {table} with id {id}")]
    NotFound { table: &'static str, id: i64 },

    /// A write broke a uniqueness, reference, range or presence rule.
    #[error("Constraint violated: {} ({message})", kind.describe())]
    Constraint { kind: ConstraintKind, message: String },

    /// Input rejected before reaching SQL.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A CSV file being imported does not fit the table.
    #[error("Import rejected at line {line}: {reason}")]
    Import { line: u64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(libsql::Error),
}

impl From<libsql::Error> for DatabaseError {
    fn from(error: libsql::Error) -> Self {
        let message = error.to_string();
        match ConstraintKind::from_message(&message) {
            Some(kind) => Self::Constraint { kind, message },
            None => Self::LibSql(error),
        }
    }
}

impl DatabaseError {
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) | Self::Import { .. } => ErrorCategory::Validation,
            Self::Constraint { .. } => ErrorCategory::Constraint,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Storage,
        }
    }
}
