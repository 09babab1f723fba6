//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the shared parsing: timestamps written by
//! Rust (`to_rfc3339()`) or by `SQLite` (`datetime('now')`), calendar dates,
//! nullable text, and the thirteen feature columns.

use chrono::{DateTime, NaiveDate, Utc};

use cardia_core::entities::Features;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a `YYYY-MM-DD` TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for any other shape.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read the thirteen feature columns starting at `offset`, in schema order.
///
/// # Errors
///
/// Returns `DatabaseError` if a column read fails.
pub fn row_to_features(row: &libsql::Row, offset: i32) -> Result<Features, DatabaseError> {
    let int = |idx: i32| row.get::<i64>(offset + idx);
    Ok(Features {
        age: int(0)?,
        sex: int(1)?,
        cp: int(2)?,
        trestbps: int(3)?,
        chol: int(4)?,
        fbs: int(5)?,
        restecg: int(6)?,
        thalach: int(7)?,
        exang: int(8)?,
        oldpeak: row.get::<f64>(offset + 9)?,
        slope: int(10)?,
        ca: int(11)?,
        thal: int(12)?,
    })
}

/// Feature values as bind parameters, in schema order.
#[must_use]
pub fn feature_params(features: &Features) -> Vec<libsql::Value> {
    vec![
        features.age.into(),
        features.sex.into(),
        features.cp.into(),
        features.trestbps.into(),
        features.chol.into(),
        features.fbs.into(),
        features.restecg.into(),
        features.thalach.into(),
        features.exang.into(),
        features.oldpeak.into(),
        features.slope.into(),
        features.ca.into(),
        features.thal.into(),
    ]
}

/// `?{start}, ?{start+1}, ...` for `count` placeholders.
#[must_use]
pub fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|idx| format!("?{idx}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a single `COUNT(*)`-style integer.
pub(crate) async fn scalar_i64(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<i64, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}
