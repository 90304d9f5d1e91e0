use slashpick::config::Config;
use slashpick::query::Truthiness;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.truthiness, Truthiness::Loose);
    assert!(config.pretty);
    assert_eq!(config.indent_size, 2);
    assert_eq!(config.store_dir, None);
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = Config {
        truthiness: Truthiness::Strict,
        pretty: false,
        indent_size: 4,
        store_dir: Some(PathBuf::from("/var/lib/docs")),
    };

    let toml_string = toml::to_string(&config).unwrap();
    assert!(toml_string.contains("truthiness = \"strict\""));

    let parsed: Config = toml::from_str(&toml_string).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_toml_gives_defaults() {
    let parsed: Config = toml::from_str("").unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn test_save_and_load_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        truthiness: Truthiness::Strict,
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_load_from_missing_or_invalid_falls_back() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    assert_eq!(Config::load_from(&missing), Config::default());

    let invalid = dir.path().join("bad.toml");
    std::fs::write(&invalid, "pretty = \"very\"").unwrap();
    assert_eq!(Config::load_from(&invalid), Config::default());
}
