//! Bounded readiness probing
//!
//! Decouples callers from the exact moment the bus becomes usable: the
//! probe checks the bus lifecycle at a fixed interval and hands control
//! back once it reports ready.
//!
//! ## Pattern
//!
//! ```text
//! ReadinessProbe --(interval)--> lifecycle() --+-- Ready     -> run work
//!        ^                                     +-- Connecting -> reschedule
//!        |                                     +-- Detached   -> setup error
//!        +------- max_wait exceeded -----------> timeout error
//! ```
//!
//! Checks never overlap; each one runs only after the previous interval
//! has fully elapsed. The wait is bounded: a bus that never becomes ready
//! produces a [`Error::Timeout`] instead of polling forever.

use crate::config::ReadinessConfig;
use crate::constants::{DEFAULT_MAX_WAIT_MS, DEFAULT_POLL_INTERVAL_MS};
use crate::logging::log_readiness_check;
use hbus_domain::error::{Error, Result};
use hbus_domain::ports::{BusLifecycle, EventBusProvider};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Sink receiving one notification per readiness check
///
/// Diagnostics are routed through this trait instead of being printed
/// inline, so tests can observe the exact check sequence.
pub trait ReadinessObserver: Send + Sync {
    /// Called after every check with the attempt number (starting at 1)
    /// and the state that was observed
    fn on_check(&self, attempt: u32, state: BusLifecycle);
}

/// Default observer emitting structured tracing events
#[derive(Debug, Default)]
pub struct TracingReadinessObserver;

impl ReadinessObserver for TracingReadinessObserver {
    fn on_check(&self, attempt: u32, state: BusLifecycle) {
        log_readiness_check(attempt, state);
    }
}

/// Polls a bus handle until it reports ready
pub struct ReadinessProbe {
    bus: Arc<dyn EventBusProvider>,
    interval: Duration,
    max_wait: Duration,
    observer: Arc<dyn ReadinessObserver>,
}

impl ReadinessProbe {
    /// Create a probe with the default interval and bound
    pub fn new(bus: Arc<dyn EventBusProvider>) -> Self {
        Self {
            bus,
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_wait: Duration::from_millis(DEFAULT_MAX_WAIT_MS),
            observer: Arc::new(TracingReadinessObserver),
        }
    }

    /// Create a probe from a readiness configuration section
    pub fn from_config(bus: Arc<dyn EventBusProvider>, config: &ReadinessConfig) -> Self {
        Self::new(bus)
            .with_interval(Duration::from_millis(config.poll_interval_ms))
            .with_max_wait(Duration::from_millis(config.max_wait_ms))
    }

    /// Set the delay between checks
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the upper bound on the total wait
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Replace the diagnostic sink
    pub fn with_observer(mut self, observer: Arc<dyn ReadinessObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Wait until the bus reports ready
    ///
    /// Sleeps one interval before the first check, matching the
    /// registration contract: even an immediately-ready bus is observed
    /// only after one delay. Returns the number of checks performed.
    ///
    /// # Errors
    ///
    /// - [`Error::Setup`] if the handle is
    ///   [`Detached`](BusLifecycle::Detached): a handle that was never
    ///   wired will not become ready, so there is nothing to retry.
    /// - [`Error::Timeout`] once `max_wait` has elapsed without readiness.
    pub async fn wait_until_ready(&self) -> Result<u32> {
        let started = Instant::now();
        let mut attempt: u32 = 0;

        loop {
            tokio::time::sleep(self.interval).await;
            attempt += 1;

            let state = self.bus.lifecycle();
            self.observer.on_check(attempt, state);

            match state {
                BusLifecycle::Ready => return Ok(attempt),
                BusLifecycle::Detached => {
                    return Err(Error::setup(
                        "bus handle is not wired into a running application context",
                    ));
                }
                BusLifecycle::Connecting => {
                    if started.elapsed() >= self.max_wait {
                        return Err(Error::timeout("bus readiness", started.elapsed()));
                    }
                }
            }
        }
    }

    /// Run `work` once the bus reports ready
    ///
    /// The deferred work is invoked exactly once, on the same task as the
    /// checks, and only after a successful wait.
    pub async fn after_ready<F, Fut, T>(&self, work: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.wait_until_ready().await?;
        Ok(work().await)
    }
}

impl std::fmt::Debug for ReadinessProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadinessProbe")
            .field("interval", &self.interval)
            .field("max_wait", &self.max_wait)
            .finish_non_exhaustive()
    }
}
