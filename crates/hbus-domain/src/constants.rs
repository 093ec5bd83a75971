//! Domain-level constants
//!
//! Message literals shared by the client, the responder, and the tests.
//! Infrastructure constants (config paths, default intervals) live in
//! `hbus_infrastructure::constants`.

/// Greeting text the client sends when no other text is configured
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Prefix of the responder's reply for the default greeting
///
/// The full reply appends the current local time, so consumers match on
/// this prefix rather than the whole string.
pub const SERVER_RESPONSE_PREFIX: &str =
    "Message from Server: Hello, World! The server's time is now";

/// Text shown on the response label before any reply has arrived
pub const INITIAL_RESPONSE_LABEL: &str = "Loading...";

/// strftime format used for the timestamp embedded in replies
pub const SERVER_TIME_FORMAT: &str = "%H:%M:%S";
