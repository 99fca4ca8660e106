use folio_client::{ApiVersion, ConfigError, StudioConfig, create_client};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn minimal_toml_fills_defaults() {
    let config = StudioConfig::from_toml(r#"project_id = "mq8wsgus""#).unwrap();
    assert_eq!(config.name, "default");
    assert_eq!(config.title, "My Personal Profile");
    assert_eq!(config.dataset, "production");
    assert_eq!(config.types, vec!["home", "project"]);
    assert_eq!(config.api_version, None);
    assert_eq!(config, StudioConfig::new("mq8wsgus"));
}

#[test]
fn full_toml_parses() {
    let toml = r#"
        name = "staging"
        title = "Portfolio (staging)"
        project_id = "mq8wsgus"
        dataset = "staging"
        api_version = "2025-02-19"
        use_cdn = true
        types = ["project"]
    "#;
    let config = StudioConfig::from_toml(toml).unwrap();
    assert_eq!(config.name, "staging");
    assert_eq!(config.dataset, "staging");
    assert_eq!(config.api_version, Some(ApiVersion::parse("2025-02-19").unwrap()));
    assert_eq!(config.use_cdn, Some(true));
    assert_eq!(config.types, vec!["project"]);
}

#[test]
fn missing_project_id_is_an_error() {
    assert!(matches!(
        StudioConfig::from_toml(r#"dataset = "production""#),
        Err(ConfigError::TomlDeserialize(_))
    ));
}

#[test]
fn invalid_api_version_is_an_error() {
    let toml = r#"
        project_id = "mq8wsgus"
        api_version = "latest"
    "#;
    assert!(StudioConfig::from_toml(toml).is_err());
}

#[test]
fn invalid_dataset_is_an_error() {
    let toml = r#"
        project_id = "mq8wsgus"
        dataset = "Not Valid"
    "#;
    assert!(matches!(
        StudioConfig::from_toml(toml),
        Err(ConfigError::InvalidDataset(_))
    ));
}

#[test]
fn toml_round_trip() {
    let mut config = StudioConfig::new("mq8wsgus");
    config.api_version = Some(ApiVersion::parse("2024-05-01").unwrap());
    let text = config.to_toml().unwrap();
    assert_eq!(StudioConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"project_id = "mq8wsgus""#).unwrap();
    writeln!(file, r#"dataset = "preview""#).unwrap();

    let config = StudioConfig::load(file.path()).unwrap();
    assert_eq!(config.dataset, "preview");
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StudioConfig::load(&dir.path().join("studio.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn client_config_binds_studio_project() {
    let handle = create_client(StudioConfig::new("mq8wsgus").client_config());
    assert_eq!(handle.project_id(), "mq8wsgus");
    assert_eq!(handle.dataset(), "production");
    assert!(!handle.use_cdn());
}
