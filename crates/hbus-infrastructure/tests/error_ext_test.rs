//! Error Context Extension Tests

use hbus_domain::error::Error;
use hbus_infrastructure::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_wraps_into_internal_error() {
    let err = io_failure().context("loading state").unwrap_err();
    assert!(matches!(err, Error::Internal { .. }), "got: {err}");
    assert!(err.to_string().contains("loading state"));
}

#[test]
fn test_with_context_is_lazy() {
    let built = std::cell::Cell::new(false);

    let ok: std::result::Result<u8, std::io::Error> = Ok(7);
    let value = ok
        .with_context(|| {
            built.set(true);
            "unused context".to_string()
        })
        .unwrap();
    assert_eq!(value, 7);
    assert!(!built.get(), "context must not be built on success");

    let err = io_failure()
        .with_context(|| format!("attempt {}", 2))
        .unwrap_err();
    assert!(err.to_string().contains("attempt 2"));
}

#[test]
fn test_typed_contexts_pick_matching_variants() {
    let err = io_failure().io_context("reading file").unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got: {err}");

    let err = io_failure().config_context("parsing settings").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }), "got: {err}");

    let err = io_failure().bus_context("publishing event").unwrap_err();
    assert!(matches!(err, Error::Bus { .. }), "got: {err}");
}
