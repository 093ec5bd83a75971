//! Bus Events
//!
//! Events are immutable facts broadcast over the message bus. Publishers
//! never know who is listening; subscribers react to whatever arrives.

/// Event definitions
pub mod bus_events;

// Re-export event types
pub use bus_events::DomainEvent;
