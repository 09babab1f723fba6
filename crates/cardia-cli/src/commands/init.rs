use std::path::PathBuf;

use anyhow::Context;
use cardia_config::PROJECT_DIR;
use cardia_db::Scenario;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::AppContext;
use crate::output::output;

const CONFIG_TEMPLATE: &str = r#"# Cardia project configuration.
# Environment variables override these values, e.g. CARDIA_MODEL__SEED=7.

[database]
# clinical_path = "clinical.db"
# registry_path = "registry.db"

[dataset]
# path = "heart_disease_data.csv"
# preview_rows = 5
# invalid_rows = "reject"   # or "skip"

[model]
# test_ratio = 0.2
# seed = 2
# max_iter = 200
# learning_rate = 0.1
# l2 = 0.0001

[general]
# default_limit = 20
# history_limit = 50
# registry_limit = 100
# max_limit = 1000
# lock_timeout_secs = 300
"#;

#[derive(Debug, Serialize)]
struct InitResponse {
    project_root: PathBuf,
    config_path: PathBuf,
    config_created: bool,
    clinical_db: PathBuf,
    registry_db: PathBuf,
}

/// Handle `cardia init`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = PathBuf::from(&args.path);
    if !root.is_dir() {
        anyhow::bail!("cannot initialize '{}': directory does not exist", root.display());
    }

    let data_dir = root.join(PROJECT_DIR);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;

    let config_path = data_dir.join("config.toml");
    let config_created = !config_path.exists();
    if config_created {
        std::fs::write(&config_path, CONFIG_TEMPLATE)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
    }

    let config = bootstrap::load_config(&root)?;
    let clinical_db = config.database.clinical_in(&data_dir);
    let registry_db = config.database.registry_in(&data_dir);

    let mut ctx = AppContext::new(root.clone(), config);
    ctx.service(Scenario::Clinical).await?;
    ctx.service(Scenario::Registry).await?;
    tracing::info!(root = %root.display(), "project initialized");

    output(
        &InitResponse {
            project_root: root,
            config_path,
            config_created,
            clinical_db,
            registry_db,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use cardia_config::CardiaConfig;

    use super::CONFIG_TEMPLATE;

    #[test]
    fn config_template_parses_to_defaults() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join(".cardia")).unwrap();
        std::fs::write(temp.path().join(".cardia/config.toml"), CONFIG_TEMPLATE).unwrap();

        let config = CardiaConfig::load_for_project(temp.path()).unwrap();
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.database.clinical_path, "clinical.db");
    }
}
