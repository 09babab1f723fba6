use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Features;
use crate::enums::Diagnosis;

/// A saved prediction: who it was for, what was entered, and what the model
/// said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PredictionRecord {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub features: Features,
    pub predicted: Diagnosis,
    pub created_at: DateTime<Utc>,
}
