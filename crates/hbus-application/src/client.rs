//! Greeting client
//!
//! Drives one half of the round trip: publishes the greeting and listens
//! for the responder's reply, mirroring it onto the [`ResponseLabel`].
//!
//! The reply is surfaced two ways: the label text (the observable outcome)
//! and a watch channel that [`GreetingClient::await_response`] resolves on.
//! The listener updates the label before signalling, so a caller woken by
//! the signal always sees the reply on the label.

use crate::view::ResponseLabel;
use futures::StreamExt;
use hbus_domain::error::{Error, Result};
use hbus_domain::events::DomainEvent;
use hbus_domain::ports::EventBusProvider;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Client side of the greeting exchange
pub struct GreetingClient {
    bus: Arc<dyn EventBusProvider>,
    greeting: String,
    label: ResponseLabel,
    response_rx: watch::Receiver<Option<String>>,
    listener: JoinHandle<()>,
}

impl GreetingClient {
    /// Subscribe to the bus and start the reply listener
    ///
    /// The subscription is established before this returns, so a reply to
    /// any later [`send_message`](Self::send_message) cannot be missed.
    pub async fn start(bus: Arc<dyn EventBusProvider>, greeting: String) -> Result<Self> {
        let label = ResponseLabel::new();
        let (response_tx, response_rx) = watch::channel(None);
        let mut events = bus.subscribe_events().await?;

        let listener_label = label.clone();
        let listener = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let DomainEvent::ResponseReceived { text } = event {
                    debug!("reply received, updating response label");
                    listener_label.set_text(text.clone()).await;
                    response_tx.send_replace(Some(text));
                }
            }
            debug!("event stream closed, reply listener stopping");
        });

        Ok(Self {
            bus,
            greeting,
            label,
            response_rx,
            listener,
        })
    }

    /// Publish the greeting, fire-and-forget
    ///
    /// The reply, if any, arrives through the listener; callers that care
    /// follow up with [`await_response`](Self::await_response).
    pub async fn send_message(&self) -> Result<()> {
        self.bus
            .publish_event(DomainEvent::GreetingSent {
                text: self.greeting.clone(),
            })
            .await
    }

    /// Wait for a reply, bounded by `grace`
    ///
    /// Resolves as soon as the reply signal fires. A reply that arrived
    /// before this call is still observed. Times out with
    /// [`Error::Timeout`] when no reply lands within the grace period.
    pub async fn await_response(&self, grace: Duration) -> Result<String> {
        let mut rx = self.response_rx.clone();
        match tokio::time::timeout(grace, rx.wait_for(|reply| reply.is_some())).await {
            Ok(Ok(reply)) => Ok((*reply).clone().unwrap_or_default()),
            Ok(Err(_)) => Err(Error::bus("reply channel closed before a response arrived")),
            Err(_) => Err(Error::timeout("server response", grace)),
        }
    }

    /// The label the reply text lands on
    pub fn response_label(&self) -> &ResponseLabel {
        &self.label
    }

    /// The greeting text this client sends
    pub fn greeting(&self) -> &str {
        &self.greeting
    }
}

impl Drop for GreetingClient {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

impl std::fmt::Debug for GreetingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreetingClient")
            .field("greeting", &self.greeting)
            .finish_non_exhaustive()
    }
}
