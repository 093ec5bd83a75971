//! Configuration section types

use crate::constants::*;
use hbus_domain::constants::DEFAULT_GREETING;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Event bus configuration
    pub bus: BusConfig,
    /// Readiness probing configuration
    pub readiness: ReadinessConfig,
    /// Greeting client configuration
    pub client: ClientConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Event bus provider kinds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusProviderKind {
    /// In-process broadcast channel (tokio), the default
    #[default]
    Broadcast,
    /// No-op bus that never delivers anything
    Null,
}

/// Event bus configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusConfig {
    /// Bus provider to use
    pub provider: BusProviderKind,

    /// Buffer capacity for the broadcast bus
    ///
    /// Number of events that can be buffered before the oldest events are
    /// dropped for lagging subscribers.
    pub capacity: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            provider: BusProviderKind::Broadcast,
            capacity: DEFAULT_EVENT_BUS_CAPACITY,
        }
    }
}

impl BusConfig {
    /// Create config for the broadcast bus with custom capacity
    pub fn broadcast_with_capacity(capacity: usize) -> Self {
        Self {
            provider: BusProviderKind::Broadcast,
            capacity,
        }
    }

    /// Create config for the null bus
    pub fn null() -> Self {
        Self {
            provider: BusProviderKind::Null,
            ..Default::default()
        }
    }
}

/// Readiness probing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Delay between readiness checks, in milliseconds
    pub poll_interval_ms: u64,

    /// Upper bound on the total readiness wait, in milliseconds
    ///
    /// When this elapses without readiness the wait fails with a timeout
    /// instead of polling forever.
    pub max_wait_ms: u64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_wait_ms: DEFAULT_MAX_WAIT_MS,
        }
    }
}

/// Greeting client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Greeting text sent to the responder
    pub greeting: String,

    /// How long to allow for the round trip before giving up, in
    /// milliseconds
    pub grace_period_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            grace_period_ms: DEFAULT_GRACE_PERIOD_MS,
        }
    }
}
