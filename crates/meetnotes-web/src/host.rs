//! Server-side [`Page`] for one HTTP request
//!
//! The browser's effects are recorded instead of performed: the last mounted
//! view becomes the response body, a reload becomes a redirect and alerts are
//! rendered as a banner.

use axum::http::{HeaderMap, header};
use chrono::FixedOffset;

use crate::format::local_offset;
use crate::page::{Location, Page};
use crate::view::Markup;

/// Location of the page a request is for.
///
/// The origin comes from the `Host` header (or `fallback_host`) and the first
/// `X-Forwarded-Proto` value, defaulting to `http`. It only describes the page;
/// the backend origin is fixed by configuration.
#[must_use]
pub fn request_location(headers: &HeaderMap, path_and_query: &str, fallback_host: &str) -> Location {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback_host);

    Location::from_path_and_query(format!("{scheme}://{host}"), path_and_query)
}

/// Page state for a single request
#[derive(Debug)]
pub struct ServerPage {
    location: Location,
    utc_offset: FixedOffset,
    prompt_answer: Option<String>,
    alerts: Vec<String>,
    reload_requested: bool,
    content: Option<Markup>,
}

impl ServerPage {
    /// A page at `location`, displayed in the server's local time zone
    #[must_use]
    pub fn new(location: Location) -> Self {
        Self {
            location,
            utc_offset: local_offset(),
            prompt_answer: None,
            alerts: Vec::new(),
            reload_requested: false,
            content: None,
        }
    }

    /// Answer the next prompt with `answer`; `None` behaves like cancel
    #[must_use]
    pub fn with_prompt_answer(mut self, answer: Option<String>) -> Self {
        self.prompt_answer = answer;
        self
    }

    /// Display times at a fixed offset
    #[must_use]
    pub const fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Alerts raised so far
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Whether a reload was requested
    #[must_use]
    pub const fn reload_requested(&self) -> bool {
        self.reload_requested
    }

    /// Last mounted view
    #[must_use]
    pub const fn content(&self) -> Option<&Markup> {
        self.content.as_ref()
    }
}

impl Page for ServerPage {
    fn location(&self) -> &Location {
        &self.location
    }

    fn prompt(&mut self, _message: &str) -> Option<String> {
        self.prompt_answer.take()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reload(&mut self) {
        self.reload_requested = true;
    }

    fn mount(&mut self, content: Markup) {
        self.content = Some(content);
    }

    fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }
}
