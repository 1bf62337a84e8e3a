//! Error types for the numeric kernels.
//!
//! Every failure a kernel can report is a distinct variant here, so a caller
//! can never mistake a rejected call for an empty or zero result.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// An argument is outside the domain of the operation
    #[error("Invalid argument `{parameter}`: {message}")]
    InvalidArgument {
        /// Detailed error message
        message: String,
        /// Name of the offending parameter
        parameter: String,
    },

    /// A working buffer could not be allocated
    #[error("Resource exhausted: {message} ({requested_bytes} bytes requested)")]
    ResourceExhausted {
        /// Detailed error message
        message: String,
        /// Size of the allocation that failed, saturated at `usize::MAX`
        requested_bytes: usize,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Detailed error message
        message: String,
        /// Configuration key that caused the error
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error (unexpected condition)
    #[error("Internal error: {message}")]
    Internal {
        /// Detailed error message
        message: String,
    },
}

impl Error {
    /// Create an invalid-argument error.
    pub fn invalid_argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a resource-exhaustion error.
    pub fn resource_exhausted(message: impl Into<String>, requested_bytes: usize) -> Self {
        Error::ResourceExhausted {
            message: message.into(),
            requested_bytes,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: None,
        }
    }

    /// Create a configuration error with key context.
    pub fn config_key(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable.
    ///
    /// Only allocation failures qualify: the same call with a smaller bound
    /// can succeed. Everything else fails identically on every retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ResourceExhausted { .. })
    }

    /// Check if this is a write to a reader that has already gone away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }

    /// Get the error category for log fields.
    pub fn category(&self) -> &'static str {
        match self {
            Error::InvalidArgument { .. } => "invalid_argument",
            Error::ResourceExhausted { .. } => "resource_exhausted",
            Error::Config { .. } => "config",
            Error::Io(_) => "io",
            Error::Serialization(_) => "serialization",
            Error::Internal { .. } => "internal",
        }
    }
}

impl From<::config::ConfigError> for Error {
    fn from(err: ::config::ConfigError) -> Self {
        match err {
            ::config::ConfigError::NotFound(key) => {
                Error::config_key("configuration key not found", key)
            }
            other => Error::config(other.to_string()),
        }
    }
}
