//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use cardia_config::{CardiaConfig, ConfigError, InvalidRows};

#[test]
fn loads_model_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[model]
test_ratio = 0.25
seed = 42
max_iter = 500
learning_rate = 0.05
l2 = 0.001
"#,
        )?;

        let config: CardiaConfig = Figment::from(Serialized::defaults(CardiaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!((config.model.test_ratio - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.model.seed, 42);
        assert_eq!(config.model.max_iter, 500);
        assert!((config.model.learning_rate - 0.05).abs() < f64::EPSILON);
        assert!((config.model.l2 - 0.001).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn loads_dataset_and_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[dataset]
path = "data/heart.csv"
preview_rows = 10
invalid_rows = "skip"

[database]
clinical_path = "/tmp/clinical.db"
"#,
        )?;

        let config: CardiaConfig = Figment::from(Serialized::defaults(CardiaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.dataset.path, "data/heart.csv");
        assert_eq!(config.dataset.preview_rows, 10);
        assert_eq!(config.dataset.invalid_rows, InvalidRows::Skip);
        assert_eq!(config.database.clinical_path, "/tmp/clinical.db");
        // Untouched field keeps its default.
        assert_eq!(config.database.registry_path, "registry.db");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".cardia").expect("project dir should create");
        jail.create_file(".cardia/config.toml", "[general]\ndefault_limit = 7\n")?;

        let config = CardiaConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn load_for_project_reads_explicit_root() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all("elsewhere/.cardia").expect("project dir should create");
        jail.create_file("elsewhere/.cardia/config.toml", "[model]\nseed = 99\n")?;

        let config = CardiaConfig::load_for_project(std::path::Path::new("elsewhere"))
            .expect("config loads");
        assert_eq!(config.model.seed, 99);
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected_on_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".cardia").expect("project dir should create");
        jail.create_file(".cardia/config.toml", "[model]\ntest_ratio = 1.5\n")?;

        let err = CardiaConfig::load().expect_err("ratio above 1 must fail");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn unknown_invalid_rows_policy_fails_extraction() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".cardia").expect("project dir should create");
        jail.create_file(".cardia/config.toml", "[dataset]\ninvalid_rows = \"coerce\"\n")?;

        let err = CardiaConfig::load().expect_err("unknown policy must fail");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn listing_default_above_the_ceiling_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".cardia").expect("project dir should create");
        jail.create_file(
            ".cardia/config.toml",
            "[general]\nmax_limit = 30\nhistory_limit = 25\nregistry_limit = 40\n",
        )?;

        let err = CardiaConfig::load().expect_err("limit above ceiling must fail");
        assert!(matches!(
            err,
            ConfigError::LimitAboveMax {
                field: "general.registry_limit",
                value: 40,
                max: 30
            }
        ));
        Ok(())
    });
}
