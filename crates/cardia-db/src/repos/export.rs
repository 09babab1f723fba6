//! CSV export and import of whole tables.
//!
//! Export writes a header row with the table's columns (id first) and one row
//! per record in id order. Reals use Rust's shortest round-trip formatting and
//! NULL becomes an empty cell, so importing an export reproduces every row.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::columns::{ColumnType, ExportTable};
use crate::error::DatabaseError;
use crate::helpers::{parse_date, parse_datetime, placeholders};
use crate::service::{CardiaService, finish};

/// One file written by [`CardiaService::export_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedTable {
    pub table: ExportTable,
    pub path: PathBuf,
    pub rows: usize,
}

fn cell(value: libsql::Value, column: &str) -> Result<String, DatabaseError> {
    match value {
        libsql::Value::Null => Ok(String::new()),
        libsql::Value::Integer(i) => Ok(i.to_string()),
        libsql::Value::Real(f) => Ok(f.to_string()),
        libsql::Value::Text(s) => Ok(s),
        libsql::Value::Blob(_) => Err(DatabaseError::InvalidState(format!(
            "column '{column}' holds a blob, which cannot be exported"
        ))),
    }
}

fn parse_cell(raw: &str, column: &str, ty: ColumnType, line: u64) -> Result<libsql::Value, DatabaseError> {
    if raw.is_empty() {
        return Ok(libsql::Value::Null);
    }
    let invalid = |kind: &str| DatabaseError::Import {
        line,
        reason: format!("column '{column}': '{raw}' is not {kind}"),
    };
    match ty {
        ColumnType::Integer => raw
            .parse::<i64>()
            .map(libsql::Value::Integer)
            .map_err(|_| invalid("an integer")),
        ColumnType::Real => raw
            .parse::<f64>()
            .map(libsql::Value::Real)
            .map_err(|_| invalid("a number")),
        ColumnType::Text => Ok(libsql::Value::Text(raw.to_string())),
        ColumnType::Date => parse_date(raw)
            .map(|_| libsql::Value::Text(raw.to_string()))
            .map_err(|_| invalid("a YYYY-MM-DD date")),
        ColumnType::Timestamp => parse_datetime(raw)
            .map(|_| libsql::Value::Text(raw.to_string()))
            .map_err(|_| invalid("a timestamp")),
    }
}

/// Read and type-check every record before touching the database.
fn read_records<R: Read>(
    table: ExportTable,
    reader: R,
) -> Result<Vec<Vec<libsql::Value>>, DatabaseError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let expected = table.column_names();
    let header: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    if header != expected {
        return Err(DatabaseError::Import {
            line: 1,
            reason: format!(
                "header must be '{}', found '{}'",
                expected.join(","),
                header.join(",")
            ),
        });
    }

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let values = record
            .iter()
            .zip(table.columns())
            .map(|(raw, (column, ty))| parse_cell(raw, column, *ty, line))
            .collect::<Result<Vec<_>, _>>()?;
        records.push(values);
    }
    Ok(records)
}

async fn replace_rows(
    conn: &libsql::Connection,
    table: ExportTable,
    records: Vec<Vec<libsql::Value>>,
) -> Result<usize, DatabaseError> {
    let columns = table.column_names();
    conn.execute(&format!("DELETE FROM {table}"), ()).await?;
    let sql = format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        columns.join(", "),
        placeholders(1, columns.len())
    );
    let count = records.len();
    for values in records {
        conn.execute(&sql, libsql::params_from_iter(values)).await?;
    }
    if table == ExportTable::HeartData {
        conn.execute(
            "UPDATE store_meta SET value = value + 1 WHERE key = 'dataset_version'",
            (),
        )
        .await?;
    }
    Ok(count)
}

impl CardiaService {
    /// Write `table` as CSV. Returns the number of data rows written.
    pub async fn export_table<W: Write>(
        &self,
        table: ExportTable,
        writer: W,
    ) -> Result<usize, DatabaseError> {
        self.require(table.scenario())?;
        let columns = table.column_names();
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(&columns)?;

        let sql = format!("SELECT {} FROM {table} ORDER BY id", columns.join(", "));
        let mut rows = self.db().conn().query(&sql, ()).await?;
        let mut count = 0;
        while let Some(row) = rows.next().await? {
            let mut record = Vec::with_capacity(columns.len());
            for (idx, column) in (0_i32..).zip(&columns) {
                record.push(cell(row.get_value(idx)?, column)?);
            }
            csv.write_record(&record)?;
            count += 1;
        }
        csv.flush()?;
        tracing::debug!(%table, rows = count, "exported table");
        Ok(count)
    }

    /// Export every table of the open store into `dir` as `<table>.csv`.
    pub async fn export_all(&self, dir: &Path) -> Result<Vec<ExportedTable>, DatabaseError> {
        std::fs::create_dir_all(dir)?;
        let mut exported = Vec::new();
        for table in ExportTable::for_scenario(self.scenario()) {
            let path = dir.join(format!("{table}.csv"));
            let file = std::fs::File::create(&path)?;
            let rows = self.export_table(table, std::io::BufWriter::new(file)).await?;
            exported.push(ExportedTable { table, path, rows });
        }
        Ok(exported)
    }

    /// Replace the contents of `table` with the rows of a CSV export,
    /// keeping their ids. All-or-nothing.
    pub async fn import_table<R: Read>(
        &self,
        table: ExportTable,
        reader: R,
    ) -> Result<usize, DatabaseError> {
        self.require(table.scenario())?;
        let records = read_records(table, reader)?;
        let tx = self.db().conn().transaction().await?;
        let result = replace_rows(&tx, table, records).await;
        let count = finish(tx, result).await?;
        tracing::info!(%table, rows = count, "imported table");
        Ok(count)
    }
}
