//! Greeting responder
//!
//! Plays the server's part of the exchange in-process: subscribes to
//! greetings and publishes a timestamped reply for each one.

use futures::StreamExt;
use hbus_domain::constants::SERVER_TIME_FORMAT;
use hbus_domain::error::Result;
use hbus_domain::events::DomainEvent;
use hbus_domain::ports::EventBusProvider;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Build the reply text for a greeting
///
/// The reply embeds the greeting verbatim and the current local time, e.g.
/// `Message from Server: Hello, World! The server's time is now 14:32:05`.
pub fn format_response(greeting: &str) -> String {
    format!(
        "Message from Server: {} The server's time is now {}",
        greeting,
        chrono::Local::now().format(SERVER_TIME_FORMAT)
    )
}

/// Server side of the greeting exchange
///
/// Stops replying when dropped.
pub struct GreetingResponder {
    task: JoinHandle<()>,
}

impl GreetingResponder {
    /// Subscribe to the bus and start replying to greetings
    ///
    /// The subscription is established before this returns, so greetings
    /// sent after startup are never missed.
    pub async fn start(bus: Arc<dyn EventBusProvider>) -> Result<Self> {
        let mut events = bus.subscribe_events().await?;

        let task = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let DomainEvent::GreetingSent { text } = event {
                    debug!(greeting = %text, "greeting received, replying");
                    let reply = DomainEvent::ResponseReceived {
                        text: format_response(&text),
                    };
                    if let Err(err) = bus.publish_event(reply).await {
                        warn!("failed to publish reply: {err}");
                    }
                }
            }
            debug!("event stream closed, responder stopping");
        });

        Ok(Self { task })
    }
}

impl Drop for GreetingResponder {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl std::fmt::Debug for GreetingResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreetingResponder").finish_non_exhaustive()
    }
}
