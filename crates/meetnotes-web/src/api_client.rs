//! HTTP client for communicating with the meeting notes backend
//!
//! Every operation issues exactly one request and hands back the raw
//! [`Response`]. Nothing is retried, validated or reshaped; interpreting the
//! body is up to the caller.

use meetnotes_core::types::{
    ActionItemId, ActionItemUpdate, AskRequest, MeetingId, MeetingUpdate, NewMeeting,
    SummarizeRequest,
};
use reqwest::{Client, Method, RequestBuilder, Response};
use thiserror::Error;
use tracing::debug;

const MEETINGS: &str = "/api/meetings";
const ACTION_ITEMS: &str = "/api/action-items";
const SUMMARIZE: &str = "/api/ai/summarize";
const ASK: &str = "/api/ai/ask";

/// Failure of an API call.
///
/// Transport failures, non-2xx statuses and undecodable bodies are all the
/// same error; callers that care can inspect [`reqwest::Error::status`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent, was answered with an error status, or
    /// its body could not be read
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API client for making HTTP requests to the meeting notes backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given base origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client that shares an existing connection pool
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Base origin every request is sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all meetings
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a non-2xx status.
    pub async fn get_meetings(&self) -> ApiResult<Response> {
        send(self.request(Method::GET, MEETINGS)).await
    }

    /// Fetch one meeting, including its action items
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a non-2xx status.
    pub async fn get_meeting(&self, id: &MeetingId) -> ApiResult<Response> {
        send(self.request(Method::GET, &item_path(MEETINGS, id))).await
    }

    /// Create a meeting
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a non-2xx status.
    pub async fn create_meeting(&self, meeting: &NewMeeting) -> ApiResult<Response> {
        send(self.request(Method::POST, MEETINGS).json(meeting)).await
    }

    /// Apply a partial update to a meeting
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a non-2xx status.
    pub async fn update_meeting(
        &self,
        id: &MeetingId,
        update: &MeetingUpdate,
    ) -> ApiResult<Response> {
        send(self.request(Method::PUT, &item_path(MEETINGS, id)).json(update)).await
    }

    /// Delete a meeting
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a non-2xx status.
    pub async fn delete_meeting(&self, id: &MeetingId) -> ApiResult<Response> {
        send(self.request(Method::DELETE, &item_path(MEETINGS, id))).await
    }

    /// List all action items
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a non-2xx status.
    pub async fn get_action_items(&self) -> ApiResult<Response> {
        send(self.request(Method::GET, ACTION_ITEMS)).await
    }

    /// Apply a partial update to an action item
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a non-2xx status.
    pub async fn update_action_item(
        &self,
        id: &ActionItemId,
        update: &ActionItemUpdate,
    ) -> ApiResult<Response> {
        send(self.request(Method::PUT, &item_path(ACTION_ITEMS, id)).json(update)).await
    }

    /// Ask the backend to summarize a meeting's notes
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a non-2xx status.
    pub async fn generate_summary(&self, meeting_id: &MeetingId) -> ApiResult<Response> {
        let body = SummarizeRequest {
            meeting_id: meeting_id.clone(),
        };
        send(self.request(Method::POST, SUMMARIZE).json(&body)).await
    }

    /// Ask a free-text question about the stored meetings
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with a non-2xx status.
    pub async fn ask_ai(&self, query: &str) -> ApiResult<Response> {
        let body = AskRequest {
            query: query.to_string(),
        };
        send(self.request(Method::POST, ASK).json(&body)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "Sending API request");
        self.client.request(method, url)
    }
}

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await?;
    Ok(response.error_for_status()?)
}

fn item_path(collection: &str, id: &MeetingId) -> String {
    format!("{collection}/{}", urlencoding::encode(&id.to_string()))
}
