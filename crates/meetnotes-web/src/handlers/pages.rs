//! Page handlers: run the page-load cycle and serve the resulting document

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use leptos::prelude::*;
use std::sync::Arc;

use crate::host::{ServerPage, request_location};
use crate::page::Page;
use crate::pages::{layout::document, not_found::NotFound};
use crate::state::AppState;
use crate::view::Markup;

/// Any `GET` page. Dashboard routes load the meeting list; everything else
/// is not rendered by this server.
pub async fn page(State(state): State<Arc<AppState>>, headers: HeaderMap, uri: Uri) -> Response {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    let mut page = ServerPage::new(request_location(
        &headers,
        path_and_query,
        &state.fallback_host(),
    ));

    let status = match state.controller().on_page_load(&mut page).await {
        Some(_) => StatusCode::OK,
        None => {
            page.mount(Markup::render(view! { <NotFound/> }));
            StatusCode::NOT_FOUND
        }
    };

    (status, render(&page)).into_response()
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

pub(crate) fn render(page: &ServerPage) -> Html<String> {
    Html(document(page.location(), page.alerts(), page.content()))
}
