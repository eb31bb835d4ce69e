//! Tests for configuration loading and path resolution
//!
//! Tests cover:
//! - Missing config file falls back to defaults
//! - Config file and dataset path priority (CLI > env > TOML > default)
//! - Tone table overrides loaded from disk
//!
//! Tests that touch TSD_CONFIG or TSD_DATASET are marked #[serial] so they do
//! not race on the process environment.

use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

use tsd_common::config::{
    resolve_config_path, resolve_dataset_path, TomlConfig, CONFIG_ENV, DATASET_ENV,
    DEFAULT_DATASET_PATH,
};
use tsd_common::tone::ToneTables;
use tsd_common::{Error, SentimentClass, TargetTone, ToneRewriter};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = TomlConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_load_if_exists() {
    let dir = TempDir::new().unwrap();
    assert_eq!(TomlConfig::load_if_exists(&dir.path().join("absent.toml")).unwrap(), None);

    let file = write_temp("port = 7001\n");
    let config = TomlConfig::load_if_exists(file.path()).unwrap().unwrap();
    assert_eq!(config.port, 7001);

    let bad = write_temp("port = \"x\"\n");
    assert!(matches!(TomlConfig::load_if_exists(bad.path()), Err(Error::Config(_))));
}

#[test]
fn test_load_config_file() {
    let file = write_temp("dataset_path = \"/data/posts.csv\"\nport = 6000\n");
    let config = TomlConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.dataset_path, Some(PathBuf::from("/data/posts.csv")));
    assert_eq!(config.port, 6000);
}

#[test]
fn test_malformed_config_is_error() {
    let file = write_temp("port = [1, 2]\n");
    assert!(matches!(
        TomlConfig::load_or_default(file.path()),
        Err(Error::Config(_))
    ));
}

#[test]
#[serial]
fn test_config_path_priority() {
    env::set_var(CONFIG_ENV, "/tmp/tsd-env-config.toml");

    let cli = Path::new("/tmp/tsd-cli-config.toml");
    assert_eq!(resolve_config_path(Some(cli), CONFIG_ENV), Some(cli.to_path_buf()));
    assert_eq!(
        resolve_config_path(None, CONFIG_ENV),
        Some(PathBuf::from("/tmp/tsd-env-config.toml"))
    );

    env::remove_var(CONFIG_ENV);
    if let Some(path) = resolve_config_path(None, CONFIG_ENV) {
        assert!(path.ends_with("tsd/config.toml"));
    }
}

#[test]
#[serial]
fn test_dataset_path_priority() {
    let toml = TomlConfig {
        dataset_path: Some(PathBuf::from("/from/toml.csv")),
        ..TomlConfig::default()
    };

    env::set_var(DATASET_ENV, "/from/env.csv");
    assert_eq!(
        resolve_dataset_path(Some(Path::new("/from/cli.csv")), DATASET_ENV, &toml),
        PathBuf::from("/from/cli.csv")
    );
    assert_eq!(
        resolve_dataset_path(None, DATASET_ENV, &toml),
        PathBuf::from("/from/env.csv")
    );

    env::remove_var(DATASET_ENV);
    assert_eq!(
        resolve_dataset_path(None, DATASET_ENV, &toml),
        PathBuf::from("/from/toml.csv")
    );
    assert_eq!(
        resolve_dataset_path(None, DATASET_ENV, &TomlConfig::default()),
        PathBuf::from(DEFAULT_DATASET_PATH)
    );
}

#[test]
fn test_tone_tables_from_file() {
    let file = write_temp(
        r#"
[positive]
framings = ["Big news: "]

[positive.substitutions]
meh = "splendid"
"#,
    );
    let tables = ToneTables::load(file.path()).unwrap();
    assert_eq!(tables.get(SentimentClass::Positive).framings(), ["Big news: "]);
    // untouched sections keep the built-in tables
    assert_eq!(tables.negative, ToneTables::builtin().negative);

    let rw = ToneRewriter::with_tables(tables);
    assert_eq!(rw.rewrite("Meh", TargetTone::Positive), "Big news: splendid");
}

#[test]
fn test_tone_tables_need_framings() {
    let file = write_temp("[neutral]\nframings = []\n");
    assert!(matches!(ToneTables::load(file.path()), Err(Error::Config(_))));
}

#[test]
fn test_tone_tables_missing_file() {
    assert!(matches!(
        ToneTables::load(Path::new("/no/such/tones.toml")),
        Err(Error::Config(_))
    ));
}
