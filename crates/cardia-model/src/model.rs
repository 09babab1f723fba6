//! Training and prediction over validated observations.

use cardia_config::ModelConfig;
use cardia_core::entities::{Features, Observation};
use cardia_core::enums::Diagnosis;
use cardia_core::responses::TrainingReport;
use cardia_core::schema::validate_vector;
use serde::Serialize;

use crate::error::ModelError;
use crate::logistic::{self, Hyperparameters, LogisticModel};
use crate::scaler::Standardizer;
use crate::split::stratified_split;

/// Everything that determines a training run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainingSettings {
    pub test_ratio: f64,
    pub seed: u64,
    pub max_iter: usize,
    pub learning_rate: f64,
    pub l2: f64,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self::from(&ModelConfig::default())
    }
}

impl From<&ModelConfig> for TrainingSettings {
    fn from(config: &ModelConfig) -> Self {
        Self {
            test_ratio: config.test_ratio,
            seed: config.seed,
            max_iter: config.max_iter,
            learning_rate: config.learning_rate,
            l2: config.l2,
        }
    }
}

/// Partition sizes and accuracies of a training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainedModel {
    scaler: Standardizer,
    logistic: LogisticModel,
    metrics: Metrics,
}

/// Split, standardize, fit and evaluate.
///
/// # Errors
///
/// Returns `EmptyDataset` when `observations` is empty and `SingleClass` when
/// only one label occurs.
pub fn train(
    observations: &[Observation],
    settings: &TrainingSettings,
) -> Result<TrainedModel, ModelError> {
    let first = observations.first().ok_or(ModelError::EmptyDataset)?;
    if observations.iter().all(|obs| obs.target == first.target) {
        return Err(ModelError::SingleClass {
            label: first.target,
        });
    }

    let labels: Vec<Diagnosis> = observations.iter().map(|obs| obs.target).collect();
    let split = stratified_split(&labels, settings.test_ratio, settings.seed);

    let raw = |idx: &usize| observations[*idx].features.to_vector().to_vec();
    let train_raw: Vec<Vec<f64>> = split.train.iter().map(raw).collect();
    let scaler = Standardizer::fit(&train_raw);

    let samples: Vec<(Vec<f64>, bool)> = split
        .train
        .iter()
        .zip(&train_raw)
        .map(|(idx, row)| (scaler.transform(row), observations[*idx].target.is_positive()))
        .collect();
    let logistic = logistic::fit(
        &samples,
        Hyperparameters {
            max_iter: settings.max_iter,
            learning_rate: settings.learning_rate,
            l2: settings.l2,
        },
    );

    let mut model = TrainedModel {
        scaler,
        logistic,
        metrics: Metrics {
            rows: observations.len(),
            train_rows: split.train.len(),
            test_rows: split.test.len(),
            train_accuracy: 0.0,
            test_accuracy: 0.0,
        },
    };
    model.metrics.train_accuracy = model.accuracy(observations, &split.train);
    model.metrics.test_accuracy = model.accuracy(observations, &split.test);

    tracing::info!(
        rows = model.metrics.rows,
        train_accuracy = model.metrics.train_accuracy,
        test_accuracy = model.metrics.test_accuracy,
        "classifier trained"
    );
    Ok(model)
}

impl TrainedModel {
    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Metrics tagged with the dataset version the model was fitted on.
    #[must_use]
    pub fn report(&self, dataset_version: i64) -> TrainingReport {
        TrainingReport {
            dataset_version,
            rows: self.metrics.rows,
            train_rows: self.metrics.train_rows,
            test_rows: self.metrics.test_rows,
            train_accuracy: self.metrics.train_accuracy,
            test_accuracy: self.metrics.test_accuracy,
        }
    }

    /// Probability that `vector` belongs to [`Diagnosis::Disease`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidFeatureVector` for the wrong arity or a value outside
    /// the feature schema.
    pub fn probability(&self, vector: &[f64]) -> Result<f64, ModelError> {
        validate_vector(vector)?;
        Ok(self.score(vector))
    }

    /// Predicted label for a raw feature vector.
    ///
    /// # Errors
    ///
    /// Same as [`Self::probability`].
    pub fn predict(&self, vector: &[f64]) -> Result<Diagnosis, ModelError> {
        self.probability(vector).map(label_for)
    }

    /// # Errors
    ///
    /// Returns `InvalidFeatureVector` when a field violates the schema.
    pub fn predict_features(&self, features: &Features) -> Result<Diagnosis, ModelError> {
        self.predict(&features.to_vector())
    }

    fn score(&self, vector: &[f64]) -> f64 {
        self.logistic
            .predict_probability(&self.scaler.transform(vector))
    }

    #[allow(clippy::cast_precision_loss)]
    fn accuracy(&self, observations: &[Observation], indices: &[usize]) -> f64 {
        if indices.is_empty() {
            return 0.0;
        }
        let correct = indices
            .iter()
            .filter(|idx| {
                let obs = &observations[**idx];
                label_for(self.score(&obs.features.to_vector())) == obs.target
            })
            .count();
        correct as f64 / indices.len() as f64
    }
}

fn label_for(probability: f64) -> Diagnosis {
    Diagnosis::from_bool(probability >= 0.5)
}
