//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Hello Bus client
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Message bus operation error
    #[error("Bus error: {message}")]
    Bus {
        /// Description of the bus error
        message: String,
    },

    /// A required collaborator was never wired into the context
    #[error("Setup error: {message}")]
    Setup {
        /// Description of what is missing
        message: String,
    },

    /// A bounded wait elapsed before the observed condition held
    #[error("timed out after {waited_ms} ms waiting for {operation}")]
    Timeout {
        /// The operation that was being waited on
        operation: String,
        /// How long the wait lasted, in milliseconds
        waited_ms: u64,
    },

    /// Observed text did not match the expected form
    #[error("expected text starting with {expected:?}, got {actual:?}")]
    Assertion {
        /// The expected prefix
        expected: String,
        /// The text actually observed
        actual: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Generic string-based error
    #[error("String error: {0}")]
    String(String),
}

// Basic error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a bus error
    pub fn bus<S: Into<String>>(message: S) -> Self {
        Self::Bus {
            message: message.into(),
        }
    }

    /// Create a setup error
    pub fn setup<S: Into<String>>(message: S) -> Self {
        Self::Setup {
            message: message.into(),
        }
    }

    /// Create a timeout error from the operation name and the elapsed wait
    pub fn timeout<S: Into<String>>(operation: S, waited: std::time::Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            waited_ms: waited.as_millis() as u64,
        }
    }

    /// Create an assertion error embedding the actually observed text
    pub fn assertion<S: Into<String>, A: Into<String>>(expected: S, actual: A) -> Self {
        Self::Assertion {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
