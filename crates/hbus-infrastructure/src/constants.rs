//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Message literals are defined in `hbus_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hbus.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hbus";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "HBUS";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for log filtering
pub const LOG_FILTER_ENV_VAR: &str = "HBUS_LOG";

// ============================================================================
// EVENT BUS CONSTANTS
// ============================================================================

/// Default broadcast channel capacity
pub const DEFAULT_EVENT_BUS_CAPACITY: usize = 1024;

// ============================================================================
// READINESS CONSTANTS
// ============================================================================

/// Default delay between readiness checks, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Default upper bound on the total readiness wait, in milliseconds
pub const DEFAULT_MAX_WAIT_MS: u64 = 15_000;

// ============================================================================
// CLIENT CONSTANTS
// ============================================================================

/// Default grace period for the server reply, in milliseconds
pub const DEFAULT_GRACE_PERIOD_MS: u64 = 2_000;
