//! # Hello Bus
//!
//! An in-process event-bus greeting client with readiness probing.
//!
//! A greeting client and a responder share a broadcast bus. The client
//! publishes a greeting, the responder replies with a timestamped message,
//! and the reply lands on an observable response label. Consumers wait for
//! the bus through a bounded readiness probe instead of assuming it is
//! usable at startup.
//!
//! ## Example
//!
//! ```ignore
//! use hbus::infrastructure::di::init_test_app;
//! use hbus::infrastructure::readiness::ReadinessProbe;
//!
//! let context = init_test_app().await?;
//! ReadinessProbe::new(context.bus()).wait_until_ready().await?;
//!
//! let client = context.client();
//! client.send_message().await?;
//! let reply = client.await_response(std::time::Duration::from_secs(2)).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - core types: errors, events, the bus port and its lifecycle
//! - `application` - the greeting client, responder, and response label
//! - `infrastructure` - bus implementations, readiness probe, config,
//!   logging, and the application context

use hbus_infrastructure::config::ConfigLoader;
use hbus_infrastructure::di::init_app;
use hbus_infrastructure::logging::init_logging;
use hbus_infrastructure::readiness::ReadinessProbe;
use std::path::Path;
use std::time::Duration;

/// Domain layer - core types and port contracts
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use hbus_domain::*;
}

/// Application layer - greeting client and responder use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use hbus_application::*;
}

/// Infrastructure layer - DI, config, readiness, and bus implementations
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use hbus_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

/// Run one greeting round trip and return the reply text
///
/// Loads configuration, initializes logging, builds the application
/// context, waits for bus readiness, sends the greeting, and awaits the
/// reply within the configured grace period.
pub async fn run(config_path: Option<&Path>, log_level: Option<&str>) -> Result<String> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;
    if let Some(level) = log_level {
        config.logging.level = level.to_string();
    }
    init_logging(&config.logging)?;

    let context = init_app(config).await?;

    let probe = ReadinessProbe::from_config(context.bus(), &context.config.readiness);
    probe.wait_until_ready().await?;

    let client = context.client();
    client.send_message().await?;
    client
        .await_response(Duration::from_millis(context.config.client.grace_period_ms))
        .await
}
