//! # Domain Layer
//!
//! Core types and boundary contracts for the Hello Bus client.
//!
//! This layer holds everything the application and infrastructure layers
//! agree on without depending on each other:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and the crate-wide `Result` alias |
//! | [`events`] | Bus events exchanged between client and responder |
//! | [`ports`] | Event-bus provider contract and its lifecycle signal |
//! | [`constants`] | Message literals shared across layers |

pub mod constants;
pub mod error;
pub mod events;
pub mod ports;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use events::DomainEvent;
pub use ports::{BusLifecycle, DomainEventStream, EventBusProvider};
