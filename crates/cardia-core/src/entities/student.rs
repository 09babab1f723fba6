use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, require_non_empty};

/// A registered student. `email` and `roll_no` are unique across the table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub roll_no: Option<String>,
    pub department: Option<String>,
}

/// Input for registering a student.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub roll_no: Option<String>,
    pub department: Option<String>,
}

impl NewStudent {
    /// Trim every field, drop blank optionals, and reject blank required ones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for a blank name or email.
    pub fn normalized(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_non_empty("name", &self.name)?.to_string(),
            email: require_non_empty("email", &self.email)?.to_string(),
            roll_no: non_blank(self.roll_no.as_deref()),
            department: non_blank(self.department.as_deref()),
        })
    }
}

/// Trim an optional value, mapping blank to `None`.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_and_drops_blank_optionals() {
        let input = NewStudent {
            name: " Grace ".into(),
            email: "grace@example.edu ".into(),
            roll_no: Some("  ".into()),
            department: Some("Math".into()),
        };
        let out = input.normalized().unwrap();
        assert_eq!(out.name, "Grace");
        assert_eq!(out.email, "grace@example.edu");
        assert_eq!(out.roll_no, None);
        assert_eq!(out.department.as_deref(), Some("Math"));
    }

    #[test]
    fn blank_email_is_rejected() {
        let input = NewStudent {
            name: "Grace".into(),
            ..Default::default()
        };
        assert_eq!(
            input.normalized().unwrap_err(),
            ValidationError::EmptyField { field: "email" }
        );
    }
}
