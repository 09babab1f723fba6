use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Diagnosis;

/// Per-label summary of one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LabelAggregate {
    pub label: Diagnosis,
    /// Column that was averaged.
    pub column: String,
    pub count: i64,
    pub mean: f64,
}
