//! Response Label and Reply Formatting Tests

use hbus_application::responder::format_response;
use hbus_application::view::ResponseLabel;
use hbus_domain::constants::{DEFAULT_GREETING, INITIAL_RESPONSE_LABEL, SERVER_RESPONSE_PREFIX};

#[tokio::test]
async fn test_label_starts_with_placeholder() {
    let label = ResponseLabel::new();
    assert_eq!(label.text().await, INITIAL_RESPONSE_LABEL);
}

#[tokio::test]
async fn test_label_clones_share_text() {
    let label = ResponseLabel::new();
    let observer = label.clone();

    label.set_text("updated").await;
    assert_eq!(observer.text().await, "updated");
}

#[tokio::test]
async fn test_ensure_prefix_accepts_matching_text() {
    let label = ResponseLabel::with_text(format_response(DEFAULT_GREETING));
    label.ensure_prefix(SERVER_RESPONSE_PREFIX).await.unwrap();
}

#[tokio::test]
async fn test_ensure_prefix_failure_embeds_actual_text() {
    let label = ResponseLabel::new();
    let err = label
        .ensure_prefix(SERVER_RESPONSE_PREFIX)
        .await
        .unwrap_err();
    assert!(
        err.to_string().contains("Loading..."),
        "failure should quote the label text, got: {err}"
    );
}

#[test]
fn test_reply_format_has_prefix_and_timestamp() {
    let reply = format_response(DEFAULT_GREETING);
    assert!(reply.starts_with(SERVER_RESPONSE_PREFIX), "got: {reply}");

    // The suffix is an HH:MM:SS local timestamp.
    let stamp = reply.rsplit(' ').next().unwrap();
    assert_eq!(stamp.len(), 8, "got: {stamp}");
    assert_eq!(stamp.as_bytes()[2], b':');
    assert_eq!(stamp.as_bytes()[5], b':');
}

#[test]
fn test_reply_format_embeds_custom_greeting() {
    let reply = format_response("Hi there!");
    assert!(reply.starts_with("Message from Server: Hi there! "), "got: {reply}");
}
