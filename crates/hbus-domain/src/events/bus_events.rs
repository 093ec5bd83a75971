//! Event definitions for the greeting exchange
//!
//! These events represent the two halves of the round trip: the client's
//! outgoing greeting and the responder's reply. Both are broadcast, so any
//! number of observers (the client's label listener, tests, the CLI) can
//! react without coupling to each other.

use serde::{Deserialize, Serialize};

/// Events exchanged over the message bus
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DomainEvent {
    /// A greeting was sent towards the responder
    GreetingSent {
        /// The greeting text
        text: String,
    },
    /// The responder produced a reply
    ResponseReceived {
        /// The full reply text, including the embedded timestamp
        text: String,
    },
}
