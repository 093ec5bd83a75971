//! Event Bus Infrastructure
//!
//! Provides the in-process event bus implementations behind the
//! [`EventBusProvider`] port: a tokio broadcast bus for real wiring and a
//! null bus that never delivers anything.

use async_trait::async_trait;
use futures::stream;
use hbus_domain::error::Result;
use hbus_domain::events::DomainEvent;
use hbus_domain::ports::{BusLifecycle, DomainEventStream, EventBusProvider};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

use crate::constants::DEFAULT_EVENT_BUS_CAPACITY;

// ============================================================================
// Null Event Bus (Testing)
// ============================================================================

/// Null event bus provider
///
/// Discards all published events and never delivers anything to
/// subscribers; subscriptions stay open but silent. Reports itself ready
/// from the start. Useful when the interesting scenario is "no reply ever
/// arrives".
#[derive(Debug, Default)]
pub struct NullEventBus;

impl NullEventBus {
    /// Create a new null event bus
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl EventBusProvider for NullEventBus {
    async fn publish_event(&self, _event: DomainEvent) -> Result<()> {
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        // Open but silent: subscribers wait forever rather than seeing a
        // closed stream.
        Ok(Box::pin(stream::pending()))
    }

    fn has_subscribers(&self) -> bool {
        false
    }

    fn lifecycle(&self) -> BusLifecycle {
        BusLifecycle::Ready
    }
}

// ============================================================================
// Broadcast Event Bus (Production)
// ============================================================================

/// Event bus provider using tokio broadcast channels
///
/// Provides in-process event distribution with multiple subscribers.
/// Events are broadcast to all active subscribers without persistence.
///
/// The handle starts [`Detached`](BusLifecycle::Detached); the owning
/// context drives it through [`Connecting`](BusLifecycle::Connecting) to
/// [`Ready`](BusLifecycle::Ready) via [`transition`](Self::transition).
#[derive(Clone)]
pub struct BroadcastEventBus {
    sender: Arc<broadcast::Sender<DomainEvent>>,
    lifecycle: Arc<watch::Sender<BusLifecycle>>,
    capacity: usize,
}

impl BroadcastEventBus {
    /// Create a new broadcast bus with default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_BUS_CAPACITY)
    }

    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        let (lifecycle, _) = watch::channel(BusLifecycle::Detached);
        Self {
            sender: Arc::new(sender),
            lifecycle: Arc::new(lifecycle),
            capacity,
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Move the lifecycle to a new state
    ///
    /// Only the owning context calls this; readiness consumers observe the
    /// state through the port.
    pub fn transition(&self, state: BusLifecycle) {
        let previous = self.lifecycle.send_replace(state);
        debug!(?previous, current = ?state, "bus lifecycle transition");
    }
}

impl Default for BroadcastEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BroadcastEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastEventBus")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .field("lifecycle", &*self.lifecycle.borrow())
            .finish()
    }
}

#[async_trait]
impl EventBusProvider for BroadcastEventBus {
    async fn publish_event(&self, event: DomainEvent) -> Result<()> {
        match self.sender.send(event) {
            Ok(count) => {
                debug!("Published event to {} subscribers", count);
            }
            Err(_) => {
                debug!("Published event but no subscribers");
            }
        }
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        let receiver = self.sender.subscribe();

        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Event stream lagged by {} events", n);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        return None;
                    }
                }
            }
        });

        Ok(Box::pin(stream))
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }

    fn lifecycle(&self) -> BusLifecycle {
        *self.lifecycle.borrow()
    }
}
