//! # cardia-db
//!
//! libSQL storage for Cardia.
//!
//! Two stores share this crate: the clinical store (labeled observations,
//! saved predictions and a dataset version counter) and the registry store
//! (students, courses and enrollments). Each is a separate database file
//! opened with the matching [`Scenario`].
//!
//! Every value reaching SQL is bound as a parameter. Column names come only
//! from the closed enums in [`columns`], never from caller strings.

pub mod columns;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

use std::fmt;

use error::DatabaseError;
use libsql::Builder;

pub use cardia_core::enums::Comparison;
pub use columns::{ExportTable, LabeledTable, ObservationColumn, Predicate, PredictionColumn};
pub use error::ConstraintKind;
pub use service::CardiaService;

/// Which set of tables a database file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Clinical,
    Registry,
}

impl Scenario {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clinical => "clinical",
            Self::Registry => "registry",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database handle for one scenario's store.
pub struct CardiaDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    scenario: Scenario,
}

impl CardiaDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs the scenario's migrations on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str, scenario: Scenario) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let cardia_db = Self { db, conn, scenario };
        cardia_db.run_migrations().await?;
        tracing::debug!(path, %scenario, "opened store");
        Ok(cardia_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn scenario(&self) -> Scenario {
        self.scenario
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_exists(db: &CardiaDb, table: &str) -> bool {
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
            )
            .await
            .unwrap();
        rows.next().await.unwrap().is_some()
    }

    #[tokio::test]
    async fn clinical_schema_is_created() {
        let db = CardiaDb::open_local(":memory:", Scenario::Clinical).await.unwrap();
        for table in ["heart_data", "predictions", "store_meta"] {
            assert!(table_exists(&db, table).await, "table '{table}' should exist");
        }
        assert!(!table_exists(&db, "students").await);
    }

    #[tokio::test]
    async fn registry_schema_is_created() {
        let db = CardiaDb::open_local(":memory:", Scenario::Registry).await.unwrap();
        for table in ["students", "courses", "enrollments"] {
            assert!(table_exists(&db, table).await, "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = CardiaDb::open_local(":memory:", Scenario::Clinical).await.unwrap();
        db.conn()
            .execute("UPDATE store_meta SET value = 5 WHERE key = 'dataset_version'", ())
            .await
            .unwrap();
        db.run_migrations().await.unwrap();

        let mut rows = db
            .conn()
            .query("SELECT value FROM store_meta WHERE key = 'dataset_version'", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 5);
    }

    #[tokio::test]
    async fn reopening_a_file_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.db");
        let path = path.to_str().unwrap();
        {
            let db = CardiaDb::open_local(path, Scenario::Registry).await.unwrap();
            db.conn()
                .execute("INSERT INTO courses (name) VALUES ('Rust')", ())
                .await
                .unwrap();
        }
        let db = CardiaDb::open_local(path, Scenario::Registry).await.unwrap();
        let mut rows = db.conn().query("SELECT COUNT(*) FROM courses", ()).await.unwrap();
        assert_eq!(rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap(), 1);
    }
}
