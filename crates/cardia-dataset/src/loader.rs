//! CSV → validated observations.
//!
//! Structural problems (broken CSV, ragged rows, missing header columns) are
//! `Malformed` and always fail the load. Cell problems (blank, non-numeric, out
//! of range) are row rejections governed by [`InvalidRows`].

use std::path::Path;

use cardia_config::InvalidRows;
use cardia_core::entities::{Observation, RejectedRow};
use cardia_core::schema::observation_columns;

use crate::error::SourceError;

/// A validated in-memory table of observations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub observations: Vec<Observation>,
    /// Rows left out under [`InvalidRows::Skip`].
    pub rejected: Vec<RejectedRow>,
    /// Header columns that are not part of the schema.
    pub ignored_columns: Vec<String>,
}

impl Dataset {
    /// First `n` rows, for display.
    #[must_use]
    pub fn preview(&self, n: usize) -> &[Observation] {
        &self.observations[..n.min(self.observations.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// Read and validate a dataset file.
///
/// # Errors
///
/// Returns `SourceError::NotFound` when the path does not exist, and any error
/// [`load_bytes`] reports for the contents.
pub fn load_path(path: &Path, policy: InvalidRows) -> Result<Dataset, SourceError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Err(SourceError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(error) => return Err(SourceError::Io(error)),
    };
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read dataset file");
    load_bytes(&bytes, policy)
}

/// Parse and validate dataset bytes (an uploaded file, for example).
///
/// # Errors
///
/// Returns `Empty` for blank input or a header with no rows, `Malformed` for
/// CSV syntax problems or a missing schema column, and `InvalidRow` for the
/// first bad row when `policy` is [`InvalidRows::Reject`].
pub fn load_bytes(bytes: &[u8], policy: InvalidRows) -> Result<Dataset, SourceError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(SourceError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let (layout, ignored_columns) = column_layout(&headers)?;
    for column in &ignored_columns {
        tracing::debug!(column = %column, "ignoring column outside the schema");
    }

    let columns = observation_columns();
    let mut dataset = Dataset {
        ignored_columns,
        ..Dataset::default()
    };
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map_or(0, csv::Position::line);
        match parse_row(&record, &layout, &columns) {
            Ok(observation) => dataset.observations.push(observation),
            Err(reason) => match policy {
                InvalidRows::Reject => return Err(SourceError::InvalidRow { line, reason }),
                InvalidRows::Skip => {
                    tracing::warn!(line, %reason, "skipping invalid dataset row");
                    dataset.rejected.push(RejectedRow { line, reason });
                }
            },
        }
    }

    if dataset.observations.is_empty() && dataset.rejected.is_empty() {
        return Err(SourceError::Empty);
    }

    tracing::info!(
        rows = dataset.observations.len(),
        rejected = dataset.rejected.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Map each schema column to its position in the header.
fn column_layout(headers: &csv::StringRecord) -> Result<(Vec<usize>, Vec<String>), SourceError> {
    let names: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| header_name(idx, name).to_ascii_lowercase())
        .collect();
    let mut layout = Vec::new();
    for column in observation_columns() {
        let idx = names
            .iter()
            .position(|name| name == column)
            .ok_or_else(|| SourceError::Malformed {
                line: 1,
                reason: format!("missing required column '{column}'"),
            })?;
        layout.push(idx);
    }

    let ignored = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| !layout.contains(idx))
        .map(|(idx, name)| header_name(idx, name).to_string())
        .collect();
    Ok((layout, ignored))
}

/// Header cell without the byte-order mark some spreadsheet exports prepend.
fn header_name(idx: usize, name: &str) -> &str {
    if idx == 0 {
        name.trim_start_matches('\u{feff}').trim_start()
    } else {
        name
    }
}

fn parse_row(
    record: &csv::StringRecord,
    layout: &[usize],
    columns: &[&str],
) -> Result<Observation, String> {
    let mut values = Vec::with_capacity(layout.len());
    for (idx, column) in layout.iter().zip(columns) {
        let cell = record.get(*idx).unwrap_or_default();
        if cell.is_empty() {
            return Err(format!("column '{column}' is blank"));
        }
        let value = cell
            .parse::<f64>()
            .map_err(|_| format!("column '{column}': '{cell}' is not a number"))?;
        values.push(value);
    }
    Observation::from_values(&values).map_err(|error| error.to_string())
}
