//! Route definitions for the web interface

use crate::{
    components::new_meeting_form::NEW_MEETING_ACTION,
    handlers::{meetings, pages},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Dashboard
        .route("/", get(pages::page))
        .route("/index.html", get(pages::page))
        // Creation flow
        .route(NEW_MEETING_ACTION, post(meetings::create_meeting))
        // Health check
        .route("/health", get(pages::health_check))
        // Everything else gets the not-found page
        .fallback(pages::page)
}
