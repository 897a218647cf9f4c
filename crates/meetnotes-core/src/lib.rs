//! Core types and utilities for the meeting notes dashboard

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, Config, LoggingConfig};
pub use error::{Error, Result};
pub use types::{ActionItem, Meeting, MeetingId, NewMeeting, RecordId};

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. The format is JSON
/// unless the configuration asks for `text`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if logging.format.eq_ignore_ascii_case("text") {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    };

    installed.map_err(|e| Error::Configuration {
        message: format!("failed to install log subscriber: {e}"),
    })
}
