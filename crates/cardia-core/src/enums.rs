//! Label and outcome enums for Cardia.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Enums stored in SQL expose an `as_i64`/`from_i64` (labels) or `as_str`
//! (everything else) pair used by the repositories.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

// ---------------------------------------------------------------------------
// Diagnosis
// ---------------------------------------------------------------------------

/// Binary label for the clinical scenario.
///
/// Stored as `0` (no disease) or `1` (disease) in `target` and `predicted`
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    NoDisease,
    Disease,
}

impl Diagnosis {
    /// Integer code used in SQL storage and CSV files.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::NoDisease => 0,
            Self::Disease => 1,
        }
    }

    /// Parse the integer code.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` for anything other than 0 or 1.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_i64(code: i64) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(Self::NoDisease),
            1 => Ok(Self::Disease),
            other => Err(ValidationError::OutOfRange {
                field: "target",
                value: other as f64,
                allowed: "{0, 1}".into(),
            }),
        }
    }

    #[must_use]
    pub const fn from_bool(positive: bool) -> Self {
        if positive { Self::Disease } else { Self::NoDisease }
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Disease)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoDisease => "no_disease",
            Self::Disease => "disease",
        }
    }

    /// Sentence shown after a prediction, e.g. `"Ada has heart disease."`.
    #[must_use]
    pub fn verdict(self, name: &str) -> String {
        let who = if name.trim().is_empty() {
            "The patient"
        } else {
            name.trim()
        };
        match self {
            Self::NoDisease => format!("{who} does not have heart disease."),
            Self::Disease => format!("{who} has heart disease."),
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

/// Result of an update-by-id or delete-by-id.
///
/// A missing id is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Mutation {
    Applied,
    NotFound,
}

impl Mutation {
    /// Map an affected-row count to an outcome.
    #[must_use]
    pub const fn from_rows(rows_affected: u64) -> Self {
        if rows_affected == 0 {
            Self::NotFound
        } else {
            Self::Applied
        }
    }

    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Comparison operator for single-column filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Comparison {
    /// SQL operator token. Only ever spliced from this closed set.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Le => "le",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
