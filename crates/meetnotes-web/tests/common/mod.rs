//! Shared helpers for the web crate's integration tests

#![allow(dead_code, clippy::unwrap_used)]

use chrono::FixedOffset;
use meetnotes_web::{Location, Page, view::Markup};
use serde_json::{Value, json};
use std::sync::Once;
use wiremock::MockServer;

static INIT: Once = Once::new();

/// Install a test subscriber once per binary
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// A page that records every effect instead of performing it
#[derive(Debug)]
pub struct RecordingPage {
    pub location: Location,
    pub prompt_answer: Option<String>,
    pub prompts: Vec<String>,
    pub alerts: Vec<String>,
    pub reloads: usize,
    pub mounted: Vec<Markup>,
}

impl RecordingPage {
    pub fn at(path: &str) -> Self {
        Self {
            location: Location::from_path_and_query("http://localhost:8080", path),
            prompt_answer: None,
            prompts: Vec::new(),
            alerts: Vec::new(),
            reloads: 0,
            mounted: Vec::new(),
        }
    }

    pub fn answering(mut self, answer: Option<&str>) -> Self {
        self.prompt_answer = answer.map(str::to_string);
        self
    }

    /// HTML currently on screen
    pub fn current(&self) -> &str {
        self.mounted.last().unwrap().as_str()
    }
}

impl Page for RecordingPage {
    fn location(&self) -> &Location {
        &self.location
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.prompt_answer.take()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn mount(&mut self, content: Markup) {
        self.mounted.push(content);
    }

    fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }
}

/// A meeting as the backend serializes it
pub fn meeting_json(id: i64, title: &str, participants: usize, tags: &[&str]) -> Value {
    let participants: Vec<String> = (0..participants).map(|i| format!("person-{i}")).collect();
    json!({
        "id": id,
        "title": title,
        "datetime": "2024-03-01T09:30:00+00:00",
        "participants": participants,
        "raw_notes": "",
        "ai_summary": "",
        "tags": tags,
        "meeting_link": "",
        "created_at": "2024-02-28T12:00:00+00:00"
    })
}

/// Number of requests a mock server has seen
pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}

/// Base URL of a port nothing listens on
pub fn unreachable_origin() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn class_matches<'a>(html: &'a str, class: &'a str) -> impl Iterator<Item = usize> + 'a {
    html.match_indices(" class=\"").filter_map(move |(at, m)| {
        let start = at + m.len();
        let len = html[start..].find('"')?;
        html[start..start + len]
            .split_whitespace()
            .any(|c| c == class)
            .then_some(start + len + 1)
    })
}

/// Number of elements whose class list contains `class`
pub fn count_class(html: &str, class: &str) -> usize {
    class_matches(html, class).count()
}

/// Leading text of every element carrying `class`
pub fn texts_by_class(html: &str, class: &str) -> Vec<String> {
    class_matches(html, class)
        .map(|end| {
            let rest = &html[end..];
            let text = &rest[rest.find('>').unwrap() + 1..];
            text[..text.find('<').unwrap_or(text.len())].to_string()
        })
        .collect()
}

/// Values of every `name="..."` attribute, in document order
pub fn attr_values(html: &str, name: &str) -> Vec<String> {
    let needle = format!(" {name}=\"");
    html.match_indices(&needle)
        .map(|(at, m)| {
            let value = &html[at + m.len()..];
            value[..value.find('"').unwrap()].to_string()
        })
        .collect()
}
