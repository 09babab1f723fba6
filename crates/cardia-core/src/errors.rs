//! Cross-cutting error types for Cardia.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g., `SourceError`, `DatabaseError`) are defined in
//! their respective crates and report an [`ErrorCategory`] so callers can
//! present them without matching on every variant. A unified error is deferred
//! to `cardia-cli` where all crate errors converge.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The five user-facing error categories.
///
/// Source and validation failures abort the current interaction. Constraint
/// and not-found outcomes are never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Dataset missing, empty, or malformed.
    Source,
    /// A value is outside the schema or a required field is empty.
    Validation,
    /// Uniqueness or foreign-key rule breach.
    Constraint,
    /// The addressed record does not exist.
    NotFound,
    /// Any other persistence failure.
    Storage,
}

impl ErrorCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Validation => "validation",
            Self::Constraint => "constraint",
            Self::NotFound => "not_found",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data failed schema validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field was empty or whitespace only.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A numeric field is outside its valid range or category set.
    #[error("{field} = {value} is outside the valid values {allowed}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        allowed: String,
    },

    /// An integer or categorical field carried a fractional value.
    #[error("{field} must be a whole number, got {value}")]
    NotIntegral { field: &'static str, value: f64 },

    /// NaN or infinity.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// A feature vector of the wrong arity.
    #[error("feature vector has {actual} values, expected {expected}")]
    Length { expected: usize, actual: usize },

    /// A named value that the schema does not know about.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A value that could not be parsed as the field's type.
    #[error("{field} could not be parsed from '{raw}'")]
    Unparseable { field: String, raw: String },
}

impl ValidationError {
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

/// Reject an empty or whitespace-only required text value.
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` when `value` trims to nothing.
pub fn require_non_empty<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed)
}
