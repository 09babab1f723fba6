//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes the ones
//! belonging to the store's scenario on open. All statements use
//! `IF NOT EXISTS` (or `INSERT OR IGNORE`) so re-running is harmless.

use crate::error::DatabaseError;
use crate::{CardiaDb, Scenario};

/// `heart_data`, `predictions`, `store_meta`.
const MIGRATION_001: &str = include_str!("../migrations/001_clinical.sql");
/// `students`, `courses`, `enrollments`.
const MIGRATION_002: &str = include_str!("../migrations/002_registry.sql");

impl CardiaDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let (name, sql) = match self.scenario {
            Scenario::Clinical => ("001_clinical", MIGRATION_001),
            Scenario::Registry => ("002_registry", MIGRATION_002),
        };
        self.conn
            .execute_batch(sql)
            .await
            .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
        tracing::debug!(migration = name, "schema ready");
        Ok(())
    }
}
