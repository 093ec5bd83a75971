//! Configuration Loader Tests

use hbus_infrastructure::config::loader::validate_app_config;
use hbus_infrastructure::config::{
    BusConfig, BusProviderKind, ClientConfig, ConfigBuilder, ConfigLoader, ReadinessConfig,
};
use hbus_infrastructure::constants::{
    DEFAULT_EVENT_BUS_CAPACITY, DEFAULT_GRACE_PERIOD_MS, DEFAULT_LOG_LEVEL,
    DEFAULT_POLL_INTERVAL_MS,
};
use tempfile::TempDir;

#[test]
fn test_config_loader_default() {
    let loader = ConfigLoader::new();
    let config = loader.load().unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.bus.provider, BusProviderKind::Broadcast);
    assert_eq!(config.bus.capacity, DEFAULT_EVENT_BUS_CAPACITY);
    assert_eq!(config.readiness.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    assert_eq!(config.client.grace_period_ms, DEFAULT_GRACE_PERIOD_MS);
    assert_eq!(config.client.greeting, "Hello, World!");
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_bus(BusConfig::null())
        .with_readiness(ReadinessConfig {
            poll_interval_ms: 100,
            max_wait_ms: 1000,
        })
        .build();

    assert_eq!(config.bus.provider, BusProviderKind::Null);
    assert_eq!(config.readiness.poll_interval_ms, 100);
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("test_config.toml");

    let loader = ConfigLoader::new();
    let original_config = ConfigBuilder::new()
        .with_client(ClientConfig {
            greeting: "Hi from disk".to_string(),
            grace_period_ms: 750,
        })
        .build();

    // Save config
    loader.save_to_file(&original_config, &config_path).unwrap();

    // Load config
    let loaded_config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(loaded_config.client.greeting, "Hi from disk");
    assert_eq!(loaded_config.client.grace_period_ms, 750);
}

#[test]
fn test_load_rejects_invalid_file_values() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[readiness]\npoll_interval_ms = 0\n").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("poll interval"), "got: {err}");
}

#[test]
fn test_validation_rejects_zero_bus_capacity() {
    let config = ConfigBuilder::new()
        .with_bus(BusConfig::broadcast_with_capacity(0))
        .build();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validation_rejects_max_wait_below_interval() {
    let config = ConfigBuilder::new()
        .with_readiness(ReadinessConfig {
            poll_interval_ms: 500,
            max_wait_ms: 100,
        })
        .build();
    let err = validate_app_config(&config).unwrap_err();
    assert!(err.to_string().contains("max wait"), "got: {err}");
}

#[test]
fn test_validation_rejects_zero_grace_period() {
    let config = ConfigBuilder::new()
        .with_client(ClientConfig {
            greeting: "Hello, World!".to_string(),
            grace_period_ms: 0,
        })
        .build();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validation_rejects_empty_greeting() {
    let config = ConfigBuilder::new()
        .with_client(ClientConfig {
            greeting: String::new(),
            grace_period_ms: 2000,
        })
        .build();
    assert!(validate_app_config(&config).is_err());
}
