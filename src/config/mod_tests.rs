use super::*;

#[test]
fn default_config_has_normal_verbosity() {
    let config = AppConfig::default();
    assert_eq!(config.get_verbosity(), VerbosityLevel::Normal);
    assert_eq!(config.tick_rate_ms, 50);
    assert!(config.content.is_none());
}

#[test]
fn set_verbosity_accepts_known_levels() {
    let mut config = AppConfig::default();
    for level in ["quiet", "normal", "verbose", "debug"] {
        config.set_value("verbosity", level.to_string()).unwrap();
        assert_eq!(config.verbosity.as_deref(), Some(level));
    }
    assert_eq!(config.get_verbosity(), VerbosityLevel::Debug);
}

#[test]
fn set_verbosity_rejects_unknown_level() {
    let mut config = AppConfig::default();
    let err = config
        .set_value("verbosity", "shouty".to_string())
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert!(config.verbosity.is_none());
}

#[test]
fn set_tick_rate_parses_integer() {
    let mut config = AppConfig::default();
    config.set_value("tick_rate_ms", "16".to_string()).unwrap();
    assert_eq!(config.tick_rate_ms, 16);

    let err = config
        .set_value("tick_rate_ms", "fast".to_string())
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn set_unknown_key_is_rejected() {
    let mut config = AppConfig::default();
    let err = config.set_value("theme", "dark".to_string()).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownConfigKey { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = AppConfig::default();
    config.set_value("content", "me.toml".to_string()).unwrap();
    config.set_value("verbosity", "verbose".to_string()).unwrap();

    let serialized = toml::to_string_pretty(&config).unwrap();
    let parsed: AppConfig = toml::from_str(&serialized).unwrap();
    assert_eq!(parsed.content.as_deref(), Some("me.toml"));
    assert_eq!(parsed.get_verbosity(), VerbosityLevel::Verbose);
}

#[test]
fn config_file_round_trips_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.set_value("tick_rate_ms", "33".to_string()).unwrap();
    std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    let parsed: AppConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.tick_rate_ms, 33);
}
