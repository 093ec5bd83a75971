//! Dependency Injection
//!
//! The composition root: builds the application context and wires the bus,
//! the responder, and the client together.

/// Application context bootstrap
pub mod bootstrap;

pub use bootstrap::{AppContext, init_app, init_test_app};
