//! Domain Port Interfaces
//!
//! Ports define the contracts that external layers must implement.
//! This follows the Dependency Inversion Principle:
//! - High-level modules (domain) define interfaces
//! - Low-level modules (infrastructure) implement them

/// Event bus provider port and lifecycle signal
pub mod bus;

// Re-export commonly used port types for convenience
pub use bus::{BusLifecycle, DomainEventStream, EventBusProvider};
