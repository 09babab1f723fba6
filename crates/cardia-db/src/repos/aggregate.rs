//! Per-label aggregates over the labeled tables.

use cardia_core::entities::LabelAggregate;
use cardia_core::enums::Diagnosis;

use crate::Scenario;
use crate::columns::TableColumn;
use crate::error::DatabaseError;
use crate::service::CardiaService;

impl CardiaService {
    /// Row count and mean of `column` for each label present, ordered by label.
    ///
    /// The table is the one `column` belongs to: `heart_data` grouped by
    /// `target`, or `predictions` grouped by `predicted`.
    pub async fn aggregate_by_label<C: TableColumn>(
        &self,
        column: C,
    ) -> Result<Vec<LabelAggregate>, DatabaseError> {
        self.require(Scenario::Clinical)?;
        let table = C::TABLE;
        let label = table.label_column();
        let sql = format!(
            "SELECT {label}, COUNT(*), AVG({column}) FROM {table} GROUP BY {label} ORDER BY {label}",
            column = column.as_str(),
            table = table.as_str(),
        );
        let mut rows = self.db().conn().query(&sql, ()).await?;

        let mut aggregates = Vec::new();
        while let Some(row) = rows.next().await? {
            aggregates.push(LabelAggregate {
                label: Diagnosis::from_i64(row.get::<i64>(0)?)?,
                column: column.as_str().to_string(),
                count: row.get::<i64>(1)?,
                mean: row.get::<f64>(2)?,
            });
        }
        Ok(aggregates)
    }
}

#[cfg(test)]
mod tests {
    use cardia_core::entities::{Features, Observation};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::columns::{ObservationColumn, PredictionColumn};

    fn with_chol(chol: i64, target: Diagnosis) -> Observation {
        Observation::new(
            Features {
                chol,
                ..Features::default()
            },
            target,
        )
    }

    #[tokio::test]
    async fn mean_cholesterol_by_target() {
        let svc = CardiaService::new_local(":memory:", Scenario::Clinical)
            .await
            .unwrap();
        svc.bulk_load(&[
            with_chol(200, Diagnosis::NoDisease),
            with_chol(300, Diagnosis::Disease),
            with_chol(250, Diagnosis::Disease),
        ])
        .await
        .unwrap();

        let aggregates = svc.aggregate_by_label(ObservationColumn::Chol).await.unwrap();
        assert_eq!(
            aggregates,
            vec![
                LabelAggregate {
                    label: Diagnosis::NoDisease,
                    column: "chol".into(),
                    count: 1,
                    mean: 200.0,
                },
                LabelAggregate {
                    label: Diagnosis::Disease,
                    column: "chol".into(),
                    count: 2,
                    mean: 275.0,
                },
            ]
        );
    }

    #[tokio::test]
    async fn labels_without_rows_are_absent() {
        let svc = CardiaService::new_local(":memory:", Scenario::Clinical)
            .await
            .unwrap();
        assert!(svc.aggregate_by_label(PredictionColumn::Age).await.unwrap().is_empty());

        svc.save_prediction("Ada", &Features::default(), Diagnosis::Disease)
            .await
            .unwrap();
        let aggregates = svc.aggregate_by_label(PredictionColumn::Age).await.unwrap();
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].label, Diagnosis::Disease);
        assert!((aggregates[0].mean - 30.0).abs() < f64::EPSILON);
    }
}
