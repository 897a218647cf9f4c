//! Error types for the meeting notes dashboard

use thiserror::Error;

/// Main error type shared by the meeting notes crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// A base origin that cannot be used to build API URLs
    #[error("Invalid API origin '{origin}': {reason}")]
    InvalidOrigin {
        /// The offending origin as configured or observed
        origin: String,
        /// Why it was rejected
        reason: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

impl Error {
    /// Build an [`Error::InvalidOrigin`] from anything printable
    pub fn invalid_origin(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidOrigin {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}
