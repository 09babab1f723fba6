use std::path::Path;

use anyhow::Context;
use cardia_config::CardiaConfig;

/// Load `<project>/.env` (if present) and then the layered configuration.
pub fn load_config(project_root: &Path) -> anyhow::Result<CardiaConfig> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    let config = CardiaConfig::load_for_project(project_root)
        .with_context(|| format!("failed to load configuration for {}", project_root.display()))?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::load_config;

    #[test]
    fn project_config_file_is_read() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join(".cardia")).unwrap();
        std::fs::write(
            temp.path().join(".cardia/config.toml"),
            "[general]\ndefault_limit = 7\n",
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.general.default_limit, 7);
    }

    #[test]
    fn invalid_project_config_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join(".cardia")).unwrap();
        std::fs::write(temp.path().join(".cardia/config.toml"), "[model]\ntest_ratio = 2.0\n")
            .unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("test_ratio"), "{err:#}");
    }
}
