//! Meeting notes web interface
//!
//! A dashboard of meetings backed by the meeting notes REST API: the API
//! client, the dashboard controller, a typed view layer and the web server
//! that hosts them.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod components;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod handlers;
pub mod host;
pub mod page;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod view;

// Re-export the main entry points
pub use api_client::{ApiClient, ApiError, ApiResult};
pub use dashboard::{CreateOutcome, DashboardController, DashboardState};
pub use error::WebError;
pub use page::{Location, Page};
pub use server::build_app;
pub use state::AppState;
