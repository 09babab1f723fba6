//! Dataset source configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "heart_disease_data.csv".into()
}

const fn default_preview_rows() -> usize {
    5
}

/// What to do with a dataset row that fails schema validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidRows {
    /// Fail the whole load on the first invalid row.
    #[default]
    Reject,
    /// Leave the row out and report it.
    Skip,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// CSV file imported when `cardia import` is run without a path.
    #[serde(default = "default_path")]
    pub path: String,

    /// Number of rows echoed back after a load.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    #[serde(default)]
    pub invalid_rows: InvalidRows,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            preview_rows: default_preview_rows(),
            invalid_rows: InvalidRows::default(),
        }
    }
}
