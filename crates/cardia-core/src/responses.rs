//! CLI response types returned as JSON by `cardia` commands.
//!
//! These structs define the shape of output for commands like
//! `cardia import`, `cardia train`, `cardia predict`, and the delete/update
//! commands that report a [`Mutation`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Features, Observation, PredictionRecord, RejectedRow};
use crate::enums::{Diagnosis, Mutation};

/// Accuracy summary of one training run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrainingReport {
    /// Store content version the model was trained on.
    pub dataset_version: i64,
    pub rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
}

/// Response from `cardia import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ImportResponse {
    pub source: String,
    pub imported: usize,
    pub rejected: Vec<RejectedRow>,
    /// First rows of the dataset, for display only.
    pub preview: Vec<Observation>,
    pub training: TrainingReport,
}

/// Response from `cardia predict`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PredictResponse {
    pub name: String,
    pub features: Features,
    pub predicted: Diagnosis,
    /// Model probability of [`Diagnosis::Disease`].
    pub probability: f64,
    pub message: String,
    /// Present when the prediction was saved in the same call.
    pub saved: Option<PredictionRecord>,
}

/// Response from update/delete commands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MutationResponse {
    pub table: String,
    pub id: i64,
    pub outcome: Mutation,
    pub message: String,
}

impl MutationResponse {
    #[must_use]
    pub fn new(table: &str, id: i64, outcome: Mutation, verb: &str) -> Self {
        let message = match outcome {
            Mutation::Applied => format!("{table} record {id} {verb}."),
            Mutation::NotFound => format!("No record found in {table} with id {id}."),
        };
        Self {
            table: table.to_string(),
            id,
            outcome,
            message,
        }
    }
}

/// Response from `count` commands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CountResponse {
    pub table: String,
    pub count: i64,
}
