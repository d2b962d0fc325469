mod common;

use std::path::Path;

use trendseed::config::{Config, ConfigError, ConfigStore};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(
        config.api.base_url,
        "https://zu621tawdd.execute-api.ap-northeast-2.amazonaws.com"
    );
    assert_eq!(config.api.feed_path, "/trend-seeds");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.timeout().as_millis(), 30_000);
    assert_eq!(config.layout.mobile_breakpoint, 768);
    assert_eq!(config.layout.header_hide_offset, 50);
    assert_eq!(config.demo.repeat, 1);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/trendseed/config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = common::temp_config(
        r#"
[api]
base_url = "http://localhost:4000"
timeout_seconds = 10
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:4000");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.feed_path, "/trend-seeds");
    assert_eq!(config.api.feed_url(), "http://localhost:4000/trend-seeds");
    assert_eq!(config.layout.mobile_breakpoint, 768);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = common::temp_config("[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_non_http_base_url_fails_validation() {
    let (_dir, path) = common::temp_config(
        r#"
[api]
base_url = "ftp://example.com"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("ftp://example.com"));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let mut config = Config::default();
    config.api.timeout_seconds = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_demo_repeat_fails_validation() {
    let mut config = Config::default();
    config.demo.repeat = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_store_update_keeps_old_config_on_invalid_override() {
    let (_dir, path) = common::temp_config("");
    let store = ConfigStore::open(path.clone()).unwrap();
    assert_eq!(store.path(), path.as_path());

    store
        .update(|c| c.api.base_url = "http://127.0.0.1:9000".to_string())
        .unwrap();
    assert_eq!(store.get().api.base_url, "http://127.0.0.1:9000");

    let result = store.update(|c| c.api.base_url = "not a url".to_string());
    assert!(result.is_err());
    assert_eq!(store.get().api.base_url, "http://127.0.0.1:9000");
}

#[test]
fn test_store_clones_share_state() {
    let store = ConfigStore::new(Config::default(), "/tmp/trendseed-test.toml".into());
    let other = store.clone();
    store.update(|c| c.demo.repeat = 4).unwrap();
    assert_eq!(other.get().demo.repeat, 4);
}
