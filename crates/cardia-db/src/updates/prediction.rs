//! Prediction update builder.

use cardia_core::enums::Diagnosis;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PredictionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted: Option<Diagnosis>,
}

#[derive(Default)]
pub struct PredictionUpdateBuilder(PredictionUpdate);

impl PredictionUpdateBuilder {
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
    pub const fn predicted(mut self, val: Diagnosis) -> Self {
        self.0.predicted = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> PredictionUpdate {
        self.0
    }
}
