//! Display formatting for dashboard values

use chrono::{FixedOffset, Local};
use meetnotes_core::types::{Timestamp, parse_timestamp};

/// Shown when a meeting has no time
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown when a meeting time cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Locale-style date and time, e.g. `3/1/2024, 9:30:00 AM`
const LOCAL_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Format a backend timestamp in the viewer's time zone.
///
/// Missing, null and empty values render as [`NOT_AVAILABLE`].
#[must_use]
pub fn format_datetime(raw: Option<&str>, offset: FixedOffset) -> String {
    match raw.and_then(parse_timestamp) {
        None => NOT_AVAILABLE.to_string(),
        Some(Timestamp::Invalid) => INVALID_DATE.to_string(),
        Some(Timestamp::Instant(at)) => at
            .with_timezone(&offset)
            .format(LOCAL_DATETIME_FORMAT)
            .to_string(),
    }
}

/// UTC offset of the machine this process runs on
#[must_use]
pub fn local_offset() -> FixedOffset {
    *Local::now().offset()
}
