//! The environment a controller renders into
//!
//! A [`Page`] owns the render target and the user-facing side effects of one
//! page load: reading the location, prompting, alerting and reloading.
//! Controllers take it as an argument instead of reaching for globals.

use chrono::FixedOffset;

use crate::{format::local_offset, view::Markup};

/// Where the page was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    origin: String,
    path: String,
    query: Option<String>,
}

impl Location {
    /// Build a location from its parts; an empty path becomes `/`
    pub fn new(origin: impl Into<String>, path: impl Into<String>, query: Option<String>) -> Self {
        let path = path.into();
        Self {
            origin: origin.into(),
            path: if path.is_empty() { "/".to_string() } else { path },
            query: query.filter(|q| !q.is_empty()),
        }
    }

    /// Build a location from an origin and a `path?query` string
    pub fn from_path_and_query(origin: impl Into<String>, path_and_query: &str) -> Self {
        match path_and_query.split_once('?') {
            Some((path, query)) => Self::new(origin, path, Some(query.to_string())),
            None => Self::new(origin, path_and_query, None),
        }
    }

    /// `scheme://host[:port]` of the page
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Path component, always starting with `/`
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query string without the leading `?`
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Path plus query, suitable for a same-site link
    #[must_use]
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }

    /// Full URL of the page
    #[must_use]
    pub fn href(&self) -> String {
        format!("{}{}", self.origin, self.path_and_query())
    }
}

/// Host environment for one page load
pub trait Page {
    /// Location of the current page
    fn location(&self) -> &Location;

    /// Ask the user for a line of text; `None` if they cancel
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Show a blocking notification
    fn alert(&mut self, message: &str);

    /// Reload the current page from scratch
    fn reload(&mut self);

    /// Replace the content area with `content`
    fn mount(&mut self, content: Markup);

    /// UTC offset of the viewer, used to display times
    fn utc_offset(&self) -> FixedOffset {
        local_offset()
    }
}
