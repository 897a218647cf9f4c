//! Web server setup and configuration

use crate::{error::WebError, routes::build_routes, state::AppState};
use axum::Router;
use meetnotes_core::Config;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete web application with all routes and state
///
/// # Errors
///
/// Returns an error if the configured API origin is unusable.
pub fn build_app(config: Config) -> Result<Router, WebError> {
    let state = Arc::new(AppState::new(config)?);

    Ok(build_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
