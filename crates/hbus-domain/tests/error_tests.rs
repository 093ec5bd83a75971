//! Error Type Tests

use hbus_domain::error::Error;
use std::time::Duration;

#[test]
fn test_builder_methods_produce_expected_variants() {
    assert!(matches!(Error::bus("boom"), Error::Bus { .. }));
    assert!(matches!(Error::setup("missing"), Error::Setup { .. }));
    assert!(matches!(Error::internal("oops"), Error::Internal { .. }));
    assert!(matches!(
        Error::configuration("bad value"),
        Error::Configuration { source: None, .. }
    ));
}

#[test]
fn test_timeout_display_includes_operation_and_wait() {
    let err = Error::timeout("server response", Duration::from_millis(1500));
    let message = err.to_string();
    assert!(message.contains("server response"), "got: {message}");
    assert!(message.contains("1500 ms"), "got: {message}");
}

#[test]
fn test_assertion_display_embeds_actual_text() {
    let err = Error::assertion("Message from Server:", "Loading...");
    let message = err.to_string();
    assert!(message.contains("Message from Server:"), "got: {message}");
    assert!(message.contains("Loading..."), "got: {message}");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err, Error::IoSimple { .. }));

    let err = Error::io_with_source(
        "reading config",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(err.to_string().contains("reading config"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn test_string_conversions() {
    let err: Error = "plain failure".into();
    assert!(matches!(err, Error::String(_)));

    let err: Error = String::from("owned failure").into();
    assert_eq!(err.to_string(), "String error: owned failure");
}
