use std::path::{Path, PathBuf};

use anyhow::Context;
use cardia_config::{CardiaConfig, PROJECT_DIR};
use cardia_db::{CardiaService, Scenario};
use cardia_model::{ModelCache, ModelError, TrainedModel, TrainingSettings};

/// Resources of one invocation. Stores open on first use, so a registry
/// command never touches the clinical file and vice versa.
pub struct AppContext {
    pub config: CardiaConfig,
    pub project_root: PathBuf,
    clinical: Option<CardiaService>,
    registry: Option<CardiaService>,
    models: ModelCache,
}

impl AppContext {
    #[must_use]
    pub fn new(project_root: PathBuf, config: CardiaConfig) -> Self {
        Self {
            config,
            project_root,
            clinical: None,
            registry: None,
            models: ModelCache::new(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.project_root.join(PROJECT_DIR)
    }

    /// The store holding `scenario`'s tables, opened (and migrated) on first use.
    pub async fn service(&mut self, scenario: Scenario) -> anyhow::Result<&CardiaService> {
        let data_dir = self.data_dir();
        let (slot, path) = match scenario {
            Scenario::Clinical => (&mut self.clinical, self.config.database.clinical_in(&data_dir)),
            Scenario::Registry => (&mut self.registry, self.config.database.registry_in(&data_dir)),
        };
        if slot.is_none() {
            *slot = Some(open_store(&path, scenario).await?);
        }
        slot.as_ref()
            .with_context(|| format!("{scenario} store is not open"))
    }

    pub async fn clinical(&mut self) -> anyhow::Result<&CardiaService> {
        self.service(Scenario::Clinical).await
    }

    pub async fn registry(&mut self) -> anyhow::Result<&CardiaService> {
        self.service(Scenario::Registry).await
    }

    /// Classifier trained on the current clinical data, with the dataset
    /// version it was trained on. Retrains only when the version moved.
    pub async fn model(&mut self) -> anyhow::Result<(i64, &TrainedModel)> {
        let settings = TrainingSettings::from(&self.config.model);
        self.service(Scenario::Clinical).await?;
        let service = self
            .clinical
            .as_ref()
            .context("clinical store is not open")?;

        let version = service.dataset_version().await?;
        let model = self
            .models
            .get_or_train(version, &settings, move || async move {
                service.training_rows().await.map_err(anyhow::Error::from)
            })
            .await
            .map_err(|error| {
                if error.downcast_ref::<ModelError>().is_some() {
                    error.context("no usable training data; run 'cardia import' first")
                } else {
                    error
                }
            })?;
        Ok((version, model))
    }
}

async fn open_store(path: &Path, scenario: Scenario) -> anyhow::Result<CardiaService> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let path_str = path.to_string_lossy();
    tracing::debug!(path = %path_str, %scenario, "opening store");
    CardiaService::new_local(&path_str, scenario)
        .await
        .with_context(|| format!("failed to open the {scenario} store at {path_str}"))
}

#[cfg(test)]
mod tests {
    use cardia_config::CardiaConfig;
    use cardia_db::Scenario;

    use super::AppContext;

    #[tokio::test]
    async fn stores_open_lazily_inside_the_project_dir() {
        let temp = tempfile::tempdir().unwrap();
        let mut ctx = AppContext::new(temp.path().to_path_buf(), CardiaConfig::default());

        assert!(!temp.path().join(".cardia/registry.db").exists());
        let scenario = ctx.registry().await.unwrap().scenario();
        assert_eq!(scenario, Scenario::Registry);
        assert!(temp.path().join(".cardia/registry.db").exists());
        assert!(!temp.path().join(".cardia/clinical.db").exists());
    }

    #[tokio::test]
    async fn model_without_data_points_at_import() {
        let temp = tempfile::tempdir().unwrap();
        let mut ctx = AppContext::new(temp.path().to_path_buf(), CardiaConfig::default());

        let err = ctx.model().await.unwrap_err();
        assert!(format!("{err:#}").contains("cardia import"), "{err:#}");
    }
}
