use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::student::non_blank;
use crate::errors::{ValidationError, require_non_empty};

/// A course students can enroll in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    /// Free-form duration, e.g. `"6 weeks"`.
    pub duration: Option<String>,
}

/// Input for creating a course.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub duration: Option<String>,
}

impl NewCourse {
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for a blank name.
    pub fn normalized(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_non_empty("name", &self.name)?.to_string(),
            duration: non_blank(self.duration.as_deref()),
        })
    }
}
