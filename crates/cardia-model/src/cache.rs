use std::future::Future;

use cardia_core::entities::Observation;

use crate::error::ModelError;
use crate::model::{TrainedModel, TrainingSettings, train};

#[derive(Debug)]
struct Cached {
    version: i64,
    model: TrainedModel,
}

/// Holds at most one trained model, keyed by dataset version.
#[derive(Debug, Default)]
pub struct ModelCache {
    entry: Option<Cached>,
}

impl ModelCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Version of the cached model, if any.
    #[must_use]
    pub fn version(&self) -> Option<i64> {
        self.entry.as_ref().map(|cached| cached.version)
    }

    /// Return the cached model for `version`, or load the rows and retrain.
    ///
    /// `load` only runs when the cache is empty or holds another version.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error or the training error.
    pub async fn get_or_train<F, Fut, E>(
        &mut self,
        version: i64,
        settings: &TrainingSettings,
        load: F,
    ) -> Result<&TrainedModel, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Observation>, E>>,
        E: From<ModelError>,
    {
        let cached = match self.entry.take() {
            Some(cached) if cached.version == version => {
                tracing::debug!(version, "reusing cached classifier");
                cached
            }
            _ => {
                let rows = load().await?;
                Cached {
                    version,
                    model: train(&rows, settings)?,
                }
            }
        };
        Ok(&self.entry.insert(cached).model)
    }
}
