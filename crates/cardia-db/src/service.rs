//! Service layer hosting every repository method.
//!
//! `CardiaService` wraps one [`CardiaDb`]. All repo methods are implemented as
//! `impl CardiaService` blocks in [`crate::repos`]; each checks that the store
//! was opened for the scenario its tables belong to.

use crate::error::DatabaseError;
use crate::{CardiaDb, Scenario};

pub struct CardiaService {
    db: CardiaDb,
}

impl CardiaService {
    /// Open (or create) a local store for `scenario`.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str, scenario: Scenario) -> Result<Self, DatabaseError> {
        let db = CardiaDb::open_local(db_path, scenario).await?;
        Ok(Self { db })
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &CardiaDb {
        &self.db
    }

    #[must_use]
    pub const fn scenario(&self) -> Scenario {
        self.db.scenario()
    }

    pub(crate) fn require(&self, scenario: Scenario) -> Result<(), DatabaseError> {
        if self.db.scenario() == scenario {
            Ok(())
        } else {
            Err(DatabaseError::InvalidState(format!(
                "operation needs the {scenario} store, but the {} store is open",
                self.db.scenario()
            )))
        }
    }
}

/// Commit `tx` when `result` is `Ok`, roll it back otherwise.
pub(crate) async fn finish<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(error) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(%rollback, "rollback failed");
            }
            Err(error)
        }
    }
}
