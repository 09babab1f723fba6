//! Student update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `Some("")` clears the roll number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_no: Option<String>,
    /// `Some("")` clears the department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Default)]
pub struct StudentUpdateBuilder(StudentUpdate);

impl StudentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn email(mut self, val: impl Into<String>) -> Self {
        self.0.email = Some(val.into());
        self
    }

    #[must_use]
    pub fn roll_no(mut self, val: impl Into<String>) -> Self {
        self.0.roll_no = Some(val.into());
        self
    }

    #[must_use]
    pub fn department(mut self, val: impl Into<String>) -> Self {
        self.0.department = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> StudentUpdate {
        self.0
    }
}
