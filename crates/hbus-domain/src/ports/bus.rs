//! Event Bus Provider Port
//!
//! Defines the contract for event publish/subscribe services together with
//! the lifecycle signal consumers poll before relying on the bus.
//!
//! Implementations (`BroadcastEventBus`, `NullEventBus`) live in the
//! infrastructure layer and are wired through the application context.

use crate::error::Result;
use crate::events::DomainEvent;
use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Boxed async stream of bus events
///
/// This type alias provides an abstract stream type that hides implementation
/// details. Implementations can use any async stream internally.
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send + Sync + 'static>>;

/// Lifecycle of a bus handle as observed by readiness consumers
///
/// The lifecycle only moves forward within a run: `Detached` handles become
/// `Connecting` when the context starts wiring them, and `Ready` stays
/// `Ready` once reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusLifecycle {
    /// The handle exists but was never wired into a running context
    Detached,
    /// Wiring has started and the bus is not usable yet
    Connecting,
    /// The bus is fully usable
    Ready,
}

impl BusLifecycle {
    /// Check whether the bus can be relied on
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Event bus provider interface for typed event pub/sub
///
/// ## Methods
///
/// | Method | Purpose |
/// |--------|---------|
/// | `publish_event` | Publish a typed [`DomainEvent`] |
/// | `subscribe_events` | Get a stream of [`DomainEvent`] for real-time updates |
/// | `has_subscribers` | Check whether anyone is listening |
/// | `lifecycle` | Observe the current [`BusLifecycle`] |
#[async_trait]
pub trait EventBusProvider: Send + Sync {
    /// Publish a typed event to all subscribers
    ///
    /// "Successfully published" means the event was sent, not necessarily
    /// that subscribers received it (depends on implementation guarantees).
    async fn publish_event(&self, event: DomainEvent) -> Result<()>;

    /// Subscribe to receive typed events
    ///
    /// The returned stream is `Send + Sync` and can be consumed across
    /// async tasks.
    async fn subscribe_events(&self) -> Result<DomainEventStream>;

    /// Check if there are any active event subscribers
    fn has_subscribers(&self) -> bool;

    /// Observe the current lifecycle of this bus handle
    ///
    /// Readiness polling reads this without mutating it; the owning context
    /// drives the transitions.
    fn lifecycle(&self) -> BusLifecycle;
}
