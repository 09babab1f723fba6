//! Prediction repository: named, labeled form submissions.

use chrono::Utc;

use cardia_core::entities::{Features, PredictionRecord};
use cardia_core::enums::{Diagnosis, Mutation};
use cardia_core::errors::require_non_empty;
use cardia_core::schema::FEATURES;

use crate::Scenario;
use crate::error::DatabaseError;
use crate::helpers::{feature_params, parse_datetime, placeholders, row_to_features, scalar_i64};
use crate::service::CardiaService;
use crate::updates::prediction::PredictionUpdate;

const TABLE: &str = "predictions";

fn feature_list() -> String {
    FEATURES.iter().map(|f| f.name).collect::<Vec<_>>().join(", ")
}

fn select_columns() -> String {
    format!("id, name, {}, predicted, created_at", feature_list())
}

fn row_to_prediction(row: &libsql::Row) -> Result<PredictionRecord, DatabaseError> {
    Ok(PredictionRecord {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        features: row_to_features(row, 2)?,
        predicted: Diagnosis::from_i64(row.get::<i64>(15)?)?,
        created_at: parse_datetime(&row.get::<String>(16)?)?,
    })
}

impl CardiaService {
    /// Persist a prediction under `name`. The label is whatever the caller
    /// got back from the classifier; nothing is remembered between calls.
    pub async fn save_prediction(
        &self,
        name: &str,
        features: &Features,
        predicted: Diagnosis,
    ) -> Result<PredictionRecord, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let name = require_non_empty("name", name)?;
        features.validate()?;
        let now = Utc::now();

        let sql = format!(
            "INSERT INTO predictions (name, {}, predicted, created_at) VALUES ({})",
            feature_list(),
            placeholders(1, 16)
        );
        let mut params: Vec<libsql::Value> = vec![name.into()];
        params.extend(feature_params(features));
        params.push(predicted.as_i64().into());
        params.push(now.to_rfc3339().into());
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        let record = PredictionRecord {
            id: self.db().conn().last_insert_rowid(),
            name: name.to_string(),
            features: *features,
            predicted,
            created_at: now,
        };
        tracing::debug!(id = record.id, predicted = %predicted, "saved prediction");
        Ok(record)
    }

    pub async fn get_prediction(&self, id: i64) -> Result<PredictionRecord, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let sql = format!("SELECT {} FROM predictions WHERE id = ?1", select_columns());
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::NotFound { table: TABLE, id })?;
        row_to_prediction(&row)
    }

    /// Newest first, optionally only one label.
    pub async fn list_predictions(
        &self,
        label: Option<Diagnosis>,
        limit: u32,
    ) -> Result<Vec<PredictionRecord>, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let mut rows = match label {
            Some(label) => {
                let sql = format!(
                    "SELECT {} FROM predictions WHERE predicted = ?1 ORDER BY id DESC LIMIT ?2",
                    select_columns()
                );
                self.db()
                    .conn()
                    .query(&sql, [label.as_i64(), i64::from(limit)])
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {} FROM predictions ORDER BY id DESC LIMIT ?1",
                    select_columns()
                );
                self.db().conn().query(&sql, [i64::from(limit)]).await?
            }
        };

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_prediction(&row)?);
        }
        Ok(records)
    }

    pub async fn count_predictions(&self) -> Result<i64, DatabaseError> {
        self.require(Scenario::Clinical)?;
        scalar_i64(self.db().conn(), "SELECT COUNT(*) FROM predictions", ()).await
    }

    pub async fn update_prediction(
        &self,
        id: i64,
        update: PredictionUpdate,
    ) -> Result<Mutation, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(require_non_empty("name", name)?.into());
            idx += 1;
        }
        if let Some(predicted) = update.predicted {
            sets.push(format!("predicted = ?{idx}"));
            params.push(predicted.as_i64().into());
            idx += 1;
        }

        if sets.is_empty() {
            return match self.get_prediction(id).await {
                Ok(_) => Ok(Mutation::Applied),
                Err(DatabaseError::NotFound { .. }) => Ok(Mutation::NotFound),
                Err(error) => Err(error),
            };
        }

        params.push(id.into());
        let sql = format!("UPDATE predictions SET {} WHERE id = ?{idx}", sets.join(", "));
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        Ok(Mutation::from_rows(affected))
    }

    pub async fn delete_prediction(&self, id: i64) -> Result<Mutation, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM predictions WHERE id = ?1", [id])
            .await?;
        Ok(Mutation::from_rows(affected))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::updates::prediction::PredictionUpdateBuilder;

    async fn test_service() -> CardiaService {
        CardiaService::new_local(":memory:", Scenario::Clinical)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn save_then_list_roundtrip() {
        let svc = test_service().await;
        let features = Features {
            age: 63,
            sex: 1,
            cp: 3,
            trestbps: 145,
            chol: 233,
            fbs: 1,
            oldpeak: 2.3,
            ..Features::default()
        };
        let saved = svc
            .save_prediction("Ada", &features, Diagnosis::Disease)
            .await
            .unwrap();

        let listed = svc.list_predictions(None, 10).await.unwrap();
        assert_eq!(listed, vec![saved.clone()]);
        assert_eq!(listed[0].name, "Ada");
        assert_eq!(listed[0].features, features);
        assert_eq!(svc.get_prediction(saved.id).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn empty_name_is_rejected_and_nothing_is_written() {
        let svc = test_service().await;
        for name in ["", "   "] {
            let result = svc
                .save_prediction(name, &Features::default(), Diagnosis::NoDisease)
                .await;
            assert!(matches!(result, Err(DatabaseError::Validation(_))));
        }
        assert_eq!(svc.count_predictions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn invalid_features_are_rejected() {
        let svc = test_service().await;
        let features = Features {
            age: 500,
            ..Features::default()
        };
        let result = svc
            .save_prediction("Ada", &features, Diagnosis::NoDisease)
            .await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
    }

    #[tokio::test]
    async fn list_filters_by_label_newest_first() {
        let svc = test_service().await;
        let first = svc
            .save_prediction("A", &Features::default(), Diagnosis::Disease)
            .await
            .unwrap();
        svc.save_prediction("B", &Features::default(), Diagnosis::NoDisease)
            .await
            .unwrap();
        let third = svc
            .save_prediction("C", &Features::default(), Diagnosis::Disease)
            .await
            .unwrap();

        let ids: Vec<i64> = svc
            .list_predictions(Some(Diagnosis::Disease), 10)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![third.id, first.id]);
        assert_eq!(svc.list_predictions(None, 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_and_delete_report_outcomes() {
        let svc = test_service().await;
        let saved = svc
            .save_prediction("Ada", &Features::default(), Diagnosis::NoDisease)
            .await
            .unwrap();

        let update = PredictionUpdateBuilder::new()
            .name("Ada L.")
            .predicted(Diagnosis::Disease)
            .build();
        assert_eq!(
            svc.update_prediction(saved.id, update).await.unwrap(),
            Mutation::Applied
        );
        let reloaded = svc.get_prediction(saved.id).await.unwrap();
        assert_eq!(reloaded.name, "Ada L.");
        assert_eq!(reloaded.predicted, Diagnosis::Disease);

        let missing = PredictionUpdateBuilder::new().name("Nobody").build();
        assert_eq!(
            svc.update_prediction(999, missing).await.unwrap(),
            Mutation::NotFound
        );

        assert_eq!(svc.delete_prediction(saved.id).await.unwrap(), Mutation::Applied);
        assert_eq!(svc.delete_prediction(saved.id).await.unwrap(), Mutation::NotFound);
        assert_eq!(svc.count_predictions().await.unwrap(), 0);
    }
}
