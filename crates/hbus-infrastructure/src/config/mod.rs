//! Configuration
//!
//! Typed configuration sections plus a loader that merges defaults, a TOML
//! file, and environment variables.

/// Configuration loading and building
pub mod loader;
/// Configuration section types
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{
    AppConfig, BusConfig, BusProviderKind, ClientConfig, LoggingConfig, ReadinessConfig,
};
