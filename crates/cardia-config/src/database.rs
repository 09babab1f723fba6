//! Database file locations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_clinical_path() -> String {
    "clinical.db".into()
}

fn default_registry_path() -> String {
    "registry.db".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Clinical database (`heart_data`, `predictions`). Relative paths resolve
    /// inside the project's `.cardia/` directory.
    #[serde(default = "default_clinical_path")]
    pub clinical_path: String,

    /// Registry database (`students`, `courses`, `enrollments`).
    #[serde(default = "default_registry_path")]
    pub registry_path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            clinical_path: default_clinical_path(),
            registry_path: default_registry_path(),
        }
    }
}

impl DatabaseConfig {
    /// Resolve the clinical database path against the data directory.
    #[must_use]
    pub fn clinical_in(&self, data_dir: &Path) -> PathBuf {
        resolve(data_dir, &self.clinical_path)
    }

    /// Resolve the registry database path against the data directory.
    #[must_use]
    pub fn registry_in(&self, data_dir: &Path) -> PathBuf {
        resolve(data_dir, &self.registry_path)
    }
}

fn resolve(data_dir: &Path, configured: &str) -> PathBuf {
    let path = PathBuf::from(configured);
    if path.is_absolute() || configured == ":memory:" {
        path
    } else {
        data_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_resolve_inside_data_dir() {
        let config = DatabaseConfig::default();
        let dir = Path::new("/work/.cardia");
        assert_eq!(config.clinical_in(dir), PathBuf::from("/work/.cardia/clinical.db"));
        assert_eq!(config.registry_in(dir), PathBuf::from("/work/.cardia/registry.db"));
    }

    #[test]
    fn absolute_and_memory_paths_are_kept() {
        let config = DatabaseConfig {
            clinical_path: "/var/lib/cardia/c.db".into(),
            registry_path: ":memory:".into(),
        };
        let dir = Path::new("/work/.cardia");
        assert_eq!(config.clinical_in(dir), PathBuf::from("/var/lib/cardia/c.db"));
        assert_eq!(config.registry_in(dir), PathBuf::from(":memory:"));
    }
}
