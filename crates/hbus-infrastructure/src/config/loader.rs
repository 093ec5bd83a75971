//! Configuration loader
//!
//! Handles loading configuration from various sources including TOML
//! files, environment variables, and default values, using Figment.

use crate::config::types::{
    AppConfig, BusConfig, ClientConfig, LoggingConfig, ReadinessConfig,
};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hbus_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources
    /// override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `HBUS_LOGGING_LEVEL`)
    pub fn load(&self) -> Result<AppConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else {
            // Try to find default config file
            if let Some(default_path) = Self::find_default_config_path() {
                if default_path.exists() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        // Add environment variables
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        // Extract and deserialize configuration
        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        // Validate configuration
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        // Try various common config file locations
        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_bus_config(config)?;
    validate_readiness_config(config)?;
    validate_client_config(config)?;
    Ok(())
}

fn validate_bus_config(config: &AppConfig) -> Result<()> {
    if config.bus.capacity == 0 {
        return Err(Error::Configuration {
            message: "Bus capacity cannot be 0".to_string(),
            source: None,
        });
    }
    Ok(())
}

fn validate_readiness_config(config: &AppConfig) -> Result<()> {
    if config.readiness.poll_interval_ms == 0 {
        return Err(Error::Configuration {
            message: "Readiness poll interval cannot be 0".to_string(),
            source: None,
        });
    }
    if config.readiness.max_wait_ms < config.readiness.poll_interval_ms {
        return Err(Error::Configuration {
            message: "Readiness max wait cannot be shorter than the poll interval".to_string(),
            source: None,
        });
    }
    Ok(())
}

fn validate_client_config(config: &AppConfig) -> Result<()> {
    if config.client.grace_period_ms == 0 {
        return Err(Error::Configuration {
            message: "Client grace period cannot be 0".to_string(),
            source: None,
        });
    }
    if config.client.greeting.is_empty() {
        return Err(Error::Configuration {
            message: "Client greeting cannot be empty".to_string(),
            source: None,
        });
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set bus configuration
    pub fn with_bus(mut self, bus: BusConfig) -> Self {
        self.config.bus = bus;
        self
    }

    /// Set readiness configuration
    pub fn with_readiness(mut self, readiness: ReadinessConfig) -> Self {
        self.config.readiness = readiness;
        self
    }

    /// Set client configuration
    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.config.client = client;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
