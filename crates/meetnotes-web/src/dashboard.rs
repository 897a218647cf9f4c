//! Dashboard controller: loads the meeting list and handles meeting creation
//!
//! Each page load goes Loading → Loaded or Error, exactly once. A second load
//! on the same [`Page`] is not coordinated with the first; whichever finishes
//! last mounts last.

use chrono::FixedOffset;
use leptos::prelude::*;
use meetnotes_core::{Meeting, NewMeeting};
use tracing::{debug, error, info};

use crate::api_client::{ApiClient, ApiResult};
use crate::components::{
    empty_state::EmptyState, loading::meetings_grid, meeting_card::MeetingCard,
    notices::ErrorNotice,
};
use crate::page::{Location, Page};
use crate::view::Markup;

/// Paths that show the dashboard
pub const DASHBOARD_PATHS: [&str; 2] = ["/", "/index.html"];

/// Text of the title prompt
pub const TITLE_PROMPT: &str = "Enter meeting title:";

/// Shown in place of the dashboard when the list cannot be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load meetings. Is the backend running?";

/// Alert raised when a meeting cannot be created
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create meeting";

/// What the dashboard is showing
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// Request in flight
    Loading,
    /// Meetings in the order the backend returned them
    Loaded(Vec<Meeting>),
    /// The list could not be fetched or decoded
    Error,
}

/// Result of the creation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// No title was given; nothing was sent
    Cancelled,
    /// The meeting was created and the page reloaded
    Created,
    /// The backend call failed and the user was alerted
    Failed,
}

/// Whether `path` shows the dashboard
#[must_use]
pub fn is_dashboard_route(path: &str) -> bool {
    DASHBOARD_PATHS.contains(&path)
}

/// Render the content area for a dashboard state
#[must_use]
pub fn render_dashboard(state: &DashboardState, location: &Location, offset: FixedOffset) -> Markup {
    match state {
        DashboardState::Loading => Markup::render(meetings_grid(())),
        DashboardState::Loaded(meetings) if meetings.is_empty() => {
            let location = location.clone();
            Markup::render(meetings_grid(view! { <EmptyState location/> }))
        }
        DashboardState::Loaded(meetings) => {
            let cards = meetings
                .iter()
                .cloned()
                .map(|meeting| view! { <MeetingCard meeting offset/> })
                .collect::<Vec<_>>();
            Markup::render(meetings_grid(cards))
        }
        DashboardState::Error => Markup::render(view! { <ErrorNotice message=LOAD_FAILED_MESSAGE/> }),
    }
}

/// Glue between the API client and a [`Page`]
#[derive(Debug, Clone)]
pub struct DashboardController {
    api: ApiClient,
}

impl DashboardController {
    /// Create a controller that talks to the backend through `api`
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// API client in use
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Run the dashboard cycle if the page is on a dashboard route.
    ///
    /// Returns `None` without touching the network for any other path.
    pub async fn on_page_load<P: Page>(&self, page: &mut P) -> Option<DashboardState> {
        if !is_dashboard_route(page.location().path()) {
            debug!(path = page.location().path(), "Not a dashboard route");
            return None;
        }
        Some(self.load_dashboard(page).await)
    }

    /// Mount the loading grid, fetch all meetings, then mount the result
    pub async fn load_dashboard<P: Page>(&self, page: &mut P) -> DashboardState {
        let offset = page.utc_offset();
        let loading = render_dashboard(&DashboardState::Loading, page.location(), offset);
        page.mount(loading);

        let state = match self.fetch_meetings().await {
            Ok(meetings) => {
                info!(count = meetings.len(), "Loaded meetings");
                DashboardState::Loaded(meetings)
            }
            Err(e) => {
                error!(error = %e, "Error loading meetings");
                DashboardState::Error
            }
        };

        let view = render_dashboard(&state, page.location(), offset);
        page.mount(view);
        state
    }

    /// Prompt for a title and create a meeting with it.
    ///
    /// An empty or cancelled prompt sends nothing. Success reloads the page;
    /// failure alerts and leaves the page as it is.
    pub async fn open_new_meeting<P: Page>(&self, page: &mut P) -> CreateOutcome {
        let Some(title) = page.prompt(TITLE_PROMPT).filter(|t| !t.is_empty()) else {
            debug!("Meeting creation cancelled");
            return CreateOutcome::Cancelled;
        };

        match self.api.create_meeting(&NewMeeting::titled(title)).await {
            Ok(response) => {
                info!(status = %response.status(), "Meeting created");
                page.reload();
                CreateOutcome::Created
            }
            Err(e) => {
                error!(error = %e, "Error creating meeting");
                page.alert(CREATE_FAILED_MESSAGE);
                CreateOutcome::Failed
            }
        }
    }

    async fn fetch_meetings(&self) -> ApiResult<Vec<Meeting>> {
        let response = self.api.get_meetings().await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::components::{
        empty_state::EMPTY_STATE_CLASS, loading::MEETINGS_GRID_ID, meeting_card::MEETING_CARD_CLASS,
    };
    use crate::view::query::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn render(state: &DashboardState) -> String {
        let location = Location::from_path_and_query("http://localhost:8080", "/");
        render_dashboard(state, &location, FixedOffset::east_opt(0).unwrap()).into_string()
    }

    fn meetings(count: usize) -> Vec<Meeting> {
        (0..count)
            .map(|i| {
                let participants = vec!["p"; i];
                serde_json::from_value(json!({
                    "id": i,
                    "title": format!("Meeting {i}"),
                    "datetime": null,
                    "participants": participants,
                    "tags": []
                }))
                .unwrap()
            })
            .collect()
    }

    #[rstest]
    #[case("/", true)]
    #[case("/index.html", true)]
    #[case("/meeting_detail.html", false)]
    #[case("/action_items.html", false)]
    #[case("/index.htm", false)]
    #[case("", false)]
    fn test_dashboard_routes(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(is_dashboard_route(path), expected);
    }

    #[test]
    fn test_render_loading() {
        let html = render(&DashboardState::Loading);

        assert!(has_id(&html, MEETINGS_GRID_ID));
        assert_eq!(count_class(&html, MEETING_CARD_CLASS), 0);
        assert_eq!(count_class(&html, EMPTY_STATE_CLASS), 0);
    }

    #[test]
    fn test_render_empty_list() {
        let html = render(&DashboardState::Loaded(Vec::new()));

        assert_eq!(count_class(&html, EMPTY_STATE_CLASS), 1);
        assert_eq!(count_class(&html, MEETING_CARD_CLASS), 0);
        assert!(html.contains("No meetings"));
    }

    #[test]
    fn test_render_cards_in_order() {
        let html = render(&DashboardState::Loaded(meetings(4)));

        assert_eq!(count_class(&html, MEETING_CARD_CLASS), 4);
        assert_eq!(attr_values(&html, "data-meeting-id"), vec!["0", "1", "2", "3"]);
        assert_eq!(count_class(&html, EMPTY_STATE_CLASS), 0);
    }

    #[test]
    fn test_participant_badge_matches_count() {
        let html = render(&DashboardState::Loaded(meetings(3)));
        assert_eq!(attr_values(&html, "data-count"), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_missing_datetime_renders_not_available() {
        let html = render(&DashboardState::Loaded(meetings(2)));
        assert_eq!(texts_by_class(&html, "meeting-time"), vec!["N/A", "N/A"]);
    }

    #[test]
    fn test_render_error() {
        let html = render(&DashboardState::Error);

        assert_eq!(texts_by_class(&html, "error-notice"), vec![LOAD_FAILED_MESSAGE]);
        assert_eq!(count_class(&html, MEETING_CARD_CLASS), 0);
        assert!(!has_id(&html, MEETINGS_GRID_ID));
    }
}
