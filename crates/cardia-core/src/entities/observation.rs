use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Features;
use crate::enums::Diagnosis;
use crate::errors::ValidationError;
use crate::schema::{FEATURE_COUNT, TARGET};

/// One labeled clinical row: the features plus the known target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Observation {
    #[serde(flatten)]
    pub features: Features,
    pub target: Diagnosis,
}

impl Observation {
    #[must_use]
    pub const fn new(features: Features, target: Diagnosis) -> Self {
        Self { features, target }
    }

    /// Build from a full row: thirteen features followed by the target.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for the wrong arity or any invalid value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_values(values: &[f64]) -> Result<Self, ValidationError> {
        if values.len() != FEATURE_COUNT + 1 {
            return Err(ValidationError::Length {
                expected: FEATURE_COUNT + 1,
                actual: values.len(),
            });
        }
        let features = Features::from_vector(&values[..FEATURE_COUNT])?;
        let target_raw = values[FEATURE_COUNT];
        TARGET.check(target_raw)?;
        let target = Diagnosis::from_i64(target_raw as i64)?;
        Ok(Self { features, target })
    }

    /// The full row in table order, target last.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_values(&self) -> Vec<f64> {
        let mut values = self.features.to_vector().to_vec();
        values.push(self.target.as_i64() as f64);
        values
    }
}

/// An observation as stored, with its row id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StoredObservation {
    pub id: i64,
    #[serde(flatten)]
    pub observation: Observation,
}

/// A dataset row that failed validation and was left out of the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RejectedRow {
    /// 1-based line number in the source file (the header is line 1).
    pub line: u64,
    pub reason: String,
}
