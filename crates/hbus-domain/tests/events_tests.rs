//! Bus Event Tests

use hbus_domain::constants::{DEFAULT_GREETING, SERVER_RESPONSE_PREFIX};
use hbus_domain::events::DomainEvent;
use hbus_domain::ports::BusLifecycle;

#[test]
fn test_events_carry_their_text() {
    let sent = DomainEvent::GreetingSent {
        text: DEFAULT_GREETING.to_string(),
    };
    let DomainEvent::GreetingSent { text } = sent else {
        panic!("wrong variant");
    };
    assert_eq!(text, "Hello, World!");
}

#[test]
fn test_event_serialization_shape() {
    // The wire shape is externally observable; subscribers written against
    // it must keep working.
    let event = DomainEvent::ResponseReceived {
        text: "hi".to_string(),
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["ResponseReceived"]["text"], "hi");
}

#[test]
fn test_response_prefix_matches_default_greeting() {
    assert!(SERVER_RESPONSE_PREFIX.contains(DEFAULT_GREETING));
    assert!(SERVER_RESPONSE_PREFIX.ends_with("now"));
}

#[test]
fn test_lifecycle_readiness() {
    assert!(BusLifecycle::Ready.is_ready());
    assert!(!BusLifecycle::Connecting.is_ready());
    assert!(!BusLifecycle::Detached.is_ready());
}
