//! Wire types exchanged with the meeting notes backend

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque, stable meeting or action item identifier.
///
/// The backend hands out integers today; strings are accepted so the client
/// never has to care.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier
    Number(i64),
    /// Textual identifier
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Meeting identifier
pub type MeetingId = RecordId;

/// Action item identifier
pub type ActionItemId = RecordId;

/// A meeting as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    /// Identifier, required to link to the detail view
    pub id: MeetingId,

    /// Meeting title
    pub title: String,

    /// When the meeting takes place; may be null or missing
    #[serde(default)]
    pub datetime: Option<String>,

    /// Participant references; only the count is displayed
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<Value>,

    /// Short labels, normally strings; see [`Meeting::tag_labels`]
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Value>,

    /// Free-form notes; the backend stores null until notes are written
    #[serde(default)]
    pub raw_notes: Option<String>,

    /// Generated summary, empty until requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,

    /// Video call link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,

    /// Creation time as reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Action items, only present on the single-meeting response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_items: Option<Vec<ActionItem>>,
}

impl Meeting {
    /// Number of participants, as shown on the dashboard badge
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Tags as displayed: strings as they are, other scalars in their JSON form
    #[must_use]
    pub fn tag_labels(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|tag| match tag {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }

    /// Parsed meeting time; see [`parse_timestamp`]
    #[must_use]
    pub fn starts_at(&self) -> Option<Timestamp> {
        self.datetime.as_deref().and_then(parse_timestamp)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A parsed backend timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// A valid instant
    Instant(DateTime<Utc>),
    /// A non-empty value that is not a recognizable timestamp
    Invalid,
}

/// Parse a backend timestamp.
///
/// Returns `None` for an empty value. RFC 3339 values keep their offset;
/// values without an offset (`2024-03-01T09:30:00`, optionally with
/// fractional seconds) are UTC, which is what the backend stores.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(raw) {
        return Some(Timestamp::Instant(dt.with_timezone(&Utc)));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map_or(Some(Timestamp::Invalid), |naive| {
            Some(Timestamp::Instant(naive.and_utc()))
        })
}

/// Action item status values used by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionItemStatus {
    /// Not started
    Pending,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

impl fmt::Display for ActionItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A follow-up task attached to a meeting.
///
/// Fields this client does not know about are kept in `extra` so they survive
/// a read-modify-write cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionItem {
    /// Identifier
    pub id: ActionItemId,

    /// Owning meeting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<MeetingId>,

    /// What needs doing
    #[serde(default)]
    pub description: String,

    /// Who is doing it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Deadline, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Progress; left as raw text when the backend sends an unknown value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Unrecognized fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of the create-meeting call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMeeting {
    /// Meeting title
    pub title: String,
    /// Participant references
    pub participants: Vec<Value>,
    /// Initial notes
    pub raw_notes: String,
    /// Initial tags
    pub tags: Vec<String>,
}

impl NewMeeting {
    /// A meeting with only a title: no participants, empty notes, no tags
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            participants: Vec::new(),
            raw_notes: String::new(),
            tags: Vec::new(),
        }
    }
}

/// Partial meeting update; unset fields are left out of the request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MeetingUpdate {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_notes: Option<String>,
    /// Replacement summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    /// Replacement call link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    /// Replacement participant list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Value>>,
    /// Replacement tag list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Partial action item update.
///
/// `status` and `owner` are the fields the backend acts on; anything in
/// `extra` is passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionItemUpdate {
    /// New status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ActionItemStatus>,
    /// New owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Additional fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of the summarize call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeRequest {
    /// Meeting to summarize
    pub meeting_id: MeetingId,
}

/// Body of the ask call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskRequest {
    /// Free-text question about the meetings
    pub query: String,
}

/// Result of the summarize call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryResponse {
    /// Generated summary
    pub summary: String,
    /// Merged tag set of the meeting
    #[serde(default)]
    pub tags: Vec<String>,
    /// Action items created from the notes
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
}

/// Result of the ask call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskResponse {
    /// Generated answer
    pub answer: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_meeting_from_backend_payload() {
        let payload = json!({
            "id": 7,
            "title": "Weekly sync",
            "datetime": "2024-03-01T09:30:00+00:00",
            "participants": ["ana", "bo"],
            "raw_notes": "",
            "ai_summary": "",
            "tags": ["team"],
            "meeting_link": "",
            "created_at": "2024-02-28T12:00:00"
        });

        let meeting: Meeting = serde_json::from_value(payload).unwrap();

        assert_eq!(meeting.id, RecordId::Number(7));
        assert_eq!(meeting.participant_count(), 2);
        assert_eq!(meeting.tag_labels(), vec!["team"]);
        assert_eq!(meeting.raw_notes.as_deref(), Some(""));
        assert!(meeting.action_items.is_none());
        assert_eq!(
            meeting.starts_at(),
            Some(Timestamp::Instant(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()))
        );
    }

    #[test]
    fn test_meeting_minimal_payload() {
        let meeting: Meeting =
            serde_json::from_value(json!({ "id": "m-1", "title": "Kickoff", "datetime": null }))
                .unwrap();

        assert_eq!(meeting.id.to_string(), "m-1");
        assert_eq!(meeting.participant_count(), 0);
        assert!(meeting.tags.is_empty());
        assert!(meeting.starts_at().is_none());
    }

    #[test]
    fn test_meeting_tolerates_nulls_and_scalar_tags() {
        let meeting: Meeting = serde_json::from_value(json!({
            "id": 2,
            "title": "Edited",
            "raw_notes": null,
            "participants": null,
            "tags": ["ops", 3, true, null]
        }))
        .unwrap();

        assert_eq!(meeting.raw_notes, None);
        assert_eq!(meeting.participant_count(), 0);
        assert_eq!(meeting.tag_labels(), vec!["ops", "3", "true", "null"]);
    }

    #[test]
    fn test_meeting_requires_id() {
        let result = serde_json::from_value::<Meeting>(json!({ "title": "No id" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(
            parse_timestamp("2024-03-01T09:30:00"),
            Some(Timestamp::Instant(expected))
        );
        assert_eq!(
            parse_timestamp("2024-03-01T11:30:00+02:00"),
            Some(Timestamp::Instant(expected))
        );
        assert_eq!(
            parse_timestamp("2024-03-01 09:30:00.000000"),
            Some(Timestamp::Instant(expected))
        );
        assert_eq!(parse_timestamp("next tuesday"), Some(Timestamp::Invalid));
    }

    #[test]
    fn test_new_meeting_defaults() {
        let body = serde_json::to_value(NewMeeting::titled("Retro")).unwrap();
        assert_eq!(
            body,
            json!({ "title": "Retro", "participants": [], "raw_notes": "", "tags": [] })
        );
    }

    #[test]
    fn test_meeting_update_omits_unset_fields() {
        let update = MeetingUpdate {
            title: Some("Renamed".to_string()),
            tags: Some(vec![]),
            ..MeetingUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({ "title": "Renamed", "tags": [] })
        );
    }

    #[test]
    fn test_action_item_keeps_unknown_fields() {
        let payload = json!({
            "id": 3,
            "meeting_id": 7,
            "description": "Send notes",
            "owner": "Unassigned",
            "due_date": null,
            "status": "in-progress",
            "priority": "high"
        });

        let item: ActionItem = serde_json::from_value(payload).unwrap();
        assert_eq!(item.status.as_deref(), Some("in-progress"));
        assert_eq!(item.extra.get("priority"), Some(&json!("high")));

        let update = ActionItemUpdate {
            status: Some(ActionItemStatus::Completed),
            ..ActionItemUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({ "status": "completed" })
        );
    }

    #[test]
    fn test_summarize_request_body() {
        let body = serde_json::to_value(SummarizeRequest {
            meeting_id: RecordId::Number(12),
        })
        .unwrap();
        assert_eq!(body, json!({ "meeting_id": 12 }));
    }
}
