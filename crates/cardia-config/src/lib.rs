//! # cardia-config
//!
//! Layered configuration loading for Cardia using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CARDIA_*` prefix, `__` as separator)
//! 2. Project-level `.cardia/config.toml`
//! 3. User-level `~/.config/cardia/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CARDIA_MODEL__SEED` -> `model.seed`,
//! `CARDIA_DATASET__INVALID_ROWS` -> `dataset.invalid_rows`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cardia_config::CardiaConfig;
//!
//! let config = CardiaConfig::load_with_dotenv().expect("config");
//! println!("held-out ratio: {}", config.model.test_ratio);
//! ```

mod database;
mod dataset;
mod error;
mod general;
mod model;

pub use database::DatabaseConfig;
pub use dataset::{DatasetConfig, InvalidRows};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use model::ModelConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project data directory.
pub const PROJECT_DIR: &str = ".cardia";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CardiaConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CardiaConfig {
    /// Load configuration from all sources, reading the project file relative
    /// to the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration for an explicit project root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        Self::extract(Self::figment_for(project_root))
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain relative to the current directory.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain for a project root.
    #[must_use]
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CARDIA_").split("__"))
    }

    /// Check cross-field constraints after extraction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()?;
        self.general.validate()
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cardia").join("config.toml"))
    }
}
