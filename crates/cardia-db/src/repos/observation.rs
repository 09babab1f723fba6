//! Observation repository: the labeled `heart_data` table.

use cardia_core::entities::{Observation, StoredObservation};
use cardia_core::enums::{Diagnosis, Mutation};
use cardia_core::schema::observation_columns;

use crate::Scenario;
use crate::columns::{ObservationColumn, Predicate, TableColumn};
use crate::error::DatabaseError;
use crate::helpers::{feature_params, placeholders, row_to_features, scalar_i64};
use crate::service::{CardiaService, finish};
use crate::updates::observation::ObservationUpdate;

const TABLE: &str = "heart_data";

fn select_columns() -> String {
    format!("id, {}", observation_columns().join(", "))
}

fn row_to_observation(row: &libsql::Row) -> Result<StoredObservation, DatabaseError> {
    Ok(StoredObservation {
        id: row.get::<i64>(0)?,
        observation: Observation::new(
            row_to_features(row, 1)?,
            Diagnosis::from_i64(row.get::<i64>(14)?)?,
        ),
    })
}

async fn insert_row(conn: &libsql::Connection, obs: &Observation) -> Result<i64, DatabaseError> {
    let sql = format!(
        "INSERT INTO heart_data ({}) VALUES ({})",
        observation_columns().join(", "),
        placeholders(1, 14)
    );
    let mut params = feature_params(&obs.features);
    params.push(obs.target.as_i64().into());
    conn.execute(&sql, libsql::params_from_iter(params)).await?;
    Ok(conn.last_insert_rowid())
}

async fn bump_version(conn: &libsql::Connection) -> Result<i64, DatabaseError> {
    conn.execute(
        "UPDATE store_meta SET value = value + 1 WHERE key = 'dataset_version'",
        (),
    )
    .await?;
    scalar_i64(
        conn,
        "SELECT value FROM store_meta WHERE key = 'dataset_version'",
        (),
    )
    .await
}

async fn replace_all(conn: &libsql::Connection, rows: &[Observation]) -> Result<i64, DatabaseError> {
    conn.execute("DELETE FROM heart_data", ()).await?;
    for obs in rows {
        insert_row(conn, obs).await?;
    }
    bump_version(conn).await
}

impl CardiaService {
    /// Content version of `heart_data`; changes whenever its rows change.
    pub async fn dataset_version(&self) -> Result<i64, DatabaseError> {
        self.require(Scenario::Clinical)?;
        scalar_i64(
            self.db().conn(),
            "SELECT value FROM store_meta WHERE key = 'dataset_version'",
            (),
        )
        .await
    }

    /// Replace every observation with `rows` in one transaction.
    ///
    /// Returns the new dataset version.
    pub async fn bulk_load(&self, rows: &[Observation]) -> Result<i64, DatabaseError> {
        self.require(Scenario::Clinical)?;
        for obs in rows {
            obs.features.validate()?;
        }
        let tx = self.db().conn().transaction().await?;
        let result = replace_all(&tx, rows).await;
        let version = finish(tx, result).await?;
        tracing::info!(rows = rows.len(), version, "bulk-loaded observations");
        Ok(version)
    }

    pub async fn insert_observation(&self, obs: &Observation) -> Result<i64, DatabaseError> {
        self.require(Scenario::Clinical)?;
        obs.features.validate()?;
        let tx = self.db().conn().transaction().await?;
        let result = match insert_row(&tx, obs).await {
            Ok(id) => bump_version(&tx).await.map(|_| id),
            Err(error) => Err(error),
        };
        finish(tx, result).await
    }

    pub async fn get_observation(&self, id: i64) -> Result<StoredObservation, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let sql = format!("SELECT {} FROM heart_data WHERE id = ?1", select_columns());
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::NotFound { table: TABLE, id })?;
        row_to_observation(&row)
    }

    pub async fn list_observations(&self, limit: u32) -> Result<Vec<StoredObservation>, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let sql = format!(
            "SELECT {} FROM heart_data ORDER BY id LIMIT ?1",
            select_columns()
        );
        let mut rows = self.db().conn().query(&sql, [i64::from(limit)]).await?;

        let mut observations = Vec::new();
        while let Some(row) = rows.next().await? {
            observations.push(row_to_observation(&row)?);
        }
        Ok(observations)
    }

    /// Rows where `predicate` holds, in id order.
    pub async fn filter_observations(
        &self,
        predicate: Predicate<ObservationColumn>,
        limit: u32,
    ) -> Result<Vec<StoredObservation>, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let sql = format!(
            "SELECT {} FROM heart_data WHERE {} ORDER BY id LIMIT ?2",
            select_columns(),
            predicate.clause(1)
        );
        let mut rows = self
            .db()
            .conn()
            .query(
                &sql,
                libsql::params![predicate.value, i64::from(limit)],
            )
            .await?;

        let mut observations = Vec::new();
        while let Some(row) = rows.next().await? {
            observations.push(row_to_observation(&row)?);
        }
        Ok(observations)
    }

    pub async fn count_observations(&self) -> Result<i64, DatabaseError> {
        self.require(Scenario::Clinical)?;
        scalar_i64(self.db().conn(), "SELECT COUNT(*) FROM heart_data", ()).await
    }

    /// Every observation in id order, for training.
    pub async fn training_rows(&self) -> Result<Vec<Observation>, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let sql = format!("SELECT {} FROM heart_data ORDER BY id", select_columns());
        let mut rows = self.db().conn().query(&sql, ()).await?;

        let mut observations = Vec::new();
        while let Some(row) = rows.next().await? {
            observations.push(row_to_observation(&row)?.observation);
        }
        Ok(observations)
    }

    pub async fn delete_observation(&self, id: i64) -> Result<Mutation, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let tx = self.db().conn().transaction().await?;
        let result = match tx.execute("DELETE FROM heart_data WHERE id = ?1", [id]).await {
            Ok(affected) => {
                let outcome = Mutation::from_rows(affected);
                if outcome.is_applied() {
                    bump_version(&tx).await.map(|_| outcome)
                } else {
                    Ok(outcome)
                }
            }
            Err(error) => Err(error.into()),
        };
        finish(tx, result).await
    }

    #[allow(clippy::cast_possible_truncation)]
    pub async fn update_observation(
        &self,
        id: i64,
        update: ObservationUpdate,
    ) -> Result<Mutation, DatabaseError> {
        self.require(Scenario::Clinical)?;
        update.validate()?;
        if update.is_empty() {
            let found = self.get_observation(id).await;
            return match found {
                Ok(_) => Ok(Mutation::Applied),
                Err(DatabaseError::NotFound { .. }) => Ok(Mutation::NotFound),
                Err(error) => Err(error),
            };
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        for (idx, (column, value)) in update.values.iter().enumerate() {
            sets.push(format!("{} = ?{}", column.as_str(), idx + 1));
            params.push(if column.spec().integral {
                libsql::Value::Integer(*value as i64)
            } else {
                libsql::Value::Real(*value)
            });
        }
        params.push(id.into());
        let sql = format!(
            "UPDATE heart_data SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );

        let tx = self.db().conn().transaction().await?;
        let result = match tx.execute(&sql, libsql::params_from_iter(params)).await {
            Ok(affected) => {
                let outcome = Mutation::from_rows(affected);
                if outcome.is_applied() {
                    bump_version(&tx).await.map(|_| outcome)
                } else {
                    Ok(outcome)
                }
            }
            Err(error) => Err(error.into()),
        };
        finish(tx, result).await
    }
}
