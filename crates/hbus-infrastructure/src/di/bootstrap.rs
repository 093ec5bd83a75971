//! Application Context Bootstrap
//!
//! Provides the composition root. Instead of a process-wide static that
//! outside code reaches into, every collaborator is constructed here
//! exactly once per run and handed out by reference.
//!
//! ## Architecture
//!
//! ```text
//! AppConfig -> bus (lifecycle: Detached -> Connecting -> Ready)
//!                -> GreetingResponder (subscribed before Ready)
//!                -> GreetingClient    (subscribed before handout)
//!                -> AppContext accessors
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_test_app().await?;
//!
//! let probe = ReadinessProbe::new(context.bus());
//! probe.wait_until_ready().await?;
//!
//! context.client().send_message().await?;
//! ```

use crate::config::{AppConfig, BusProviderKind};
use crate::events::{BroadcastEventBus, NullEventBus};
use hbus_application::{GreetingClient, GreetingResponder};
use hbus_domain::error::Result;
use hbus_domain::ports::{BusLifecycle, EventBusProvider};
use std::sync::Arc;
use tracing::info;

/// Application context holding the wired collaborators
///
/// Accessors hand out the same shared instances on every call; reading
/// twice never constructs twice.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    bus: Arc<dyn EventBusProvider>,
    client: Arc<GreetingClient>,

    // Owned so the reply loop lives exactly as long as the context
    #[allow(dead_code)]
    responder: Option<GreetingResponder>,
}

impl AppContext {
    /// Get the event bus
    pub fn bus(&self) -> Arc<dyn EventBusProvider> {
        self.bus.clone()
    }

    /// Get the greeting client
    pub fn client(&self) -> Arc<GreetingClient> {
        self.client.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("bus_lifecycle", &self.bus.lifecycle())
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context from a configuration
///
/// Wiring order matters: the responder subscribes before the bus is marked
/// ready, so a greeting sent right after a successful readiness wait always
/// has a listener.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let config = Arc::new(config);

    let (bus, responder): (Arc<dyn EventBusProvider>, Option<GreetingResponder>) =
        match config.bus.provider {
            BusProviderKind::Broadcast => {
                let bus = Arc::new(BroadcastEventBus::with_capacity(config.bus.capacity));
                bus.transition(BusLifecycle::Connecting);

                let bus_handle: Arc<dyn EventBusProvider> = bus.clone();
                let responder = GreetingResponder::start(bus_handle.clone()).await?;
                bus.transition(BusLifecycle::Ready);

                info!("Broadcast bus wired, responder attached");
                (bus_handle, Some(responder))
            }
            BusProviderKind::Null => {
                info!("Null bus wired, no responder");
                (NullEventBus::new_shared(), None)
            }
        };

    let client = Arc::new(
        GreetingClient::start(bus.clone(), config.client.greeting.clone()).await?,
    );

    info!("Application context ready");

    Ok(AppContext {
        config,
        bus,
        client,
        responder,
    })
}

/// Initialize an application context for testing
pub async fn init_test_app() -> Result<AppContext> {
    init_app(AppConfig::default()).await
}
