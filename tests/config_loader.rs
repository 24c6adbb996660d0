use grocerylist::config::{Config, ConfigError, StorageConfig};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("grocerylist/config.toml"));
}

#[test]
fn missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert!(config.storage.settings_path.is_none());
    assert!(config.settings_path().ends_with("grocerylist/settings.toml"));
}

#[test]
fn settings_path_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[storage]\nsettings_path = \"/tmp/groceries/settings.toml\"\n",
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(
        config.settings_path(),
        PathBuf::from("/tmp/groceries/settings.toml")
    );
}

#[test]
fn empty_storage_section_is_valid() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[storage]\n").unwrap();
    assert!(Config::load_from(&config_path).is_ok());
}

#[test]
fn parse_error_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[storage\n").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn validation_rejects_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        storage: StorageConfig {
            settings_path: Some(temp_dir.path().to_path_buf()),
        },
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn validation_rejects_empty_path() {
    let config = Config {
        storage: StorageConfig {
            settings_path: Some(PathBuf::new()),
        },
    };
    assert!(config.validate().is_err());
}
