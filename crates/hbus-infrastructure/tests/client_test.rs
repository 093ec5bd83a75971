//! Greeting Client Round-Trip Tests
//!
//! Exercise the client and responder against the real broadcast bus.

use hbus_application::{GreetingClient, GreetingResponder};
use hbus_domain::constants::{DEFAULT_GREETING, INITIAL_RESPONSE_LABEL, SERVER_RESPONSE_PREFIX};
use hbus_domain::error::Error;
use hbus_domain::ports::EventBusProvider;
use hbus_infrastructure::events::BroadcastEventBus;
use std::sync::Arc;
use std::time::Duration;

fn broadcast_bus() -> Arc<dyn EventBusProvider> {
    BroadcastEventBus::new_shared()
}

#[tokio::test]
async fn test_round_trip_updates_label_and_resolves_waiter() {
    let bus = broadcast_bus();
    let _responder = GreetingResponder::start(bus.clone()).await.unwrap();
    let client = GreetingClient::start(bus, DEFAULT_GREETING.to_string())
        .await
        .unwrap();

    assert_eq!(client.response_label().text().await, INITIAL_RESPONSE_LABEL);

    client.send_message().await.unwrap();
    let reply = client
        .await_response(Duration::from_secs(2))
        .await
        .unwrap();

    assert!(reply.starts_with(SERVER_RESPONSE_PREFIX), "got: {reply}");
    assert_eq!(client.response_label().text().await, reply);
}

#[tokio::test]
async fn test_await_response_times_out_without_responder() {
    let bus = broadcast_bus();
    let client = GreetingClient::start(bus, DEFAULT_GREETING.to_string())
        .await
        .unwrap();

    client.send_message().await.unwrap();
    let err = client
        .await_response(Duration::from_millis(100))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { .. }), "got: {err}");
    assert_eq!(client.response_label().text().await, INITIAL_RESPONSE_LABEL);
}

#[tokio::test]
async fn test_late_waiter_still_observes_reply() {
    let bus = broadcast_bus();
    let _responder = GreetingResponder::start(bus.clone()).await.unwrap();
    let client = GreetingClient::start(bus, DEFAULT_GREETING.to_string())
        .await
        .unwrap();

    client.send_message().await.unwrap();

    // Let the reply land before anyone waits for it.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let reply = client
        .await_response(Duration::from_millis(100))
        .await
        .unwrap();
    assert!(reply.starts_with(SERVER_RESPONSE_PREFIX), "got: {reply}");
}

#[tokio::test]
async fn test_custom_greeting_round_trip() {
    let bus = broadcast_bus();
    let _responder = GreetingResponder::start(bus.clone()).await.unwrap();
    let client = GreetingClient::start(bus, "Good evening!".to_string())
        .await
        .unwrap();

    assert_eq!(client.greeting(), "Good evening!");

    client.send_message().await.unwrap();
    let reply = client
        .await_response(Duration::from_secs(2))
        .await
        .unwrap();
    assert!(
        reply.starts_with("Message from Server: Good evening! "),
        "got: {reply}"
    );
}
