//! Application state management

use meetnotes_core::Config;

use crate::api_client::ApiClient;
use crate::dashboard::DashboardController;
use crate::error::WebError;

/// Application state holding configuration and the backend client
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    controller: DashboardController,
}

impl AppState {
    /// Create new application state, resolving the backend origin once
    ///
    /// # Errors
    ///
    /// Returns an error if the configured API origin is unusable.
    pub fn new(config: Config) -> Result<Self, WebError> {
        let origin = config.api.resolve_origin()?;
        let controller = DashboardController::new(ApiClient::new(origin));
        Ok(Self { config, controller })
    }

    /// Controller shared by every page load
    #[must_use]
    pub const fn controller(&self) -> &DashboardController {
        &self.controller
    }

    /// Host used for page locations when a request carries no `Host` header
    #[must_use]
    pub fn fallback_host(&self) -> String {
        format!("{}:{}", self.config.web.host, self.config.web.port)
    }
}
