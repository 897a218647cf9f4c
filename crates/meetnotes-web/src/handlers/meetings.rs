//! Meeting creation handler

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::dashboard::CreateOutcome;
use crate::handlers::pages::render;
use crate::host::{ServerPage, request_location};
use crate::state::AppState;

/// Submission of the "New Meeting" form
#[derive(Debug, Default, Deserialize)]
pub struct NewMeetingForm {
    /// Answer to the title prompt
    #[serde(default)]
    pub title: Option<String>,
    /// Page the form was submitted from
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Run the creation flow for a submitted title.
///
/// Created and cancelled both go back to the originating page; a failure
/// renders the alert instead.
pub async fn create_meeting(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<NewMeetingForm>,
) -> Response {
    let return_to = same_site_path(form.return_to.as_deref());
    let mut page = ServerPage::new(request_location(
        &headers,
        return_to,
        &state.fallback_host(),
    ))
    .with_prompt_answer(form.title);

    let outcome = state.controller().open_new_meeting(&mut page).await;

    match outcome {
        CreateOutcome::Created | CreateOutcome::Cancelled => Redirect::to(return_to).into_response(),
        CreateOutcome::Failed => (StatusCode::BAD_GATEWAY, render(&page)).into_response(),
    }
}

/// `return_to` if it is a path on this site, `/` otherwise
fn same_site_path(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}
