//! Error types for the web server

use thiserror::Error;

/// Errors that stop the web server from starting or serving
#[derive(Error, Debug)]
pub enum WebError {
    /// Configuration, API origin or logging setup failed
    #[error(transparent)]
    Core(#[from] meetnotes_core::Error),

    /// The configured bind address is not an IP address
    #[error("Invalid web server host '{host}': {source}")]
    InvalidHost {
        /// Configured host
        host: String,
        /// Parse failure
        #[source]
        source: std::net::AddrParseError,
    },

    /// Binding or serving failed
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
