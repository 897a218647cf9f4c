//! Card summarizing one meeting on the dashboard

use chrono::FixedOffset;
use leptos::prelude::*;
use meetnotes_core::Meeting;

use crate::format::format_datetime;

/// Class marking a meeting card
pub const MEETING_CARD_CLASS: &str = "meeting-card";

/// Detail view every card links to
pub const MEETING_DETAIL_PATH: &str = "/meeting_detail.html";

/// Link to the detail view of a meeting
#[must_use]
pub fn detail_href(meeting: &Meeting) -> String {
    format!(
        "{MEETING_DETAIL_PATH}?id={}",
        urlencoding::encode(&meeting.id.to_string())
    )
}

/// Meeting card: title, participant badge, time and tags, linking to the detail view
#[component]
pub fn MeetingCard(
    /// Meeting to summarize
    meeting: Meeting,
    /// Viewer's UTC offset
    offset: FixedOffset,
) -> impl IntoView {
    let href = detail_href(&meeting);
    let id = meeting.id.to_string();
    let participants = meeting.participant_count();
    let time = format_datetime(meeting.datetime.as_deref(), offset);
    let tags = meeting
        .tag_labels()
        .into_iter()
        .map(|tag| {
            view! {
                <span class="meeting-tag inline-flex items-center px-2 py-0.5 rounded text-xs font-medium bg-indigo-100 text-indigo-800">
                    {format!("#{tag}")}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <a
            class="meeting-card block bg-white overflow-hidden shadow rounded-lg hover:shadow-md transition-shadow cursor-pointer"
            href=href
            data-meeting-id=id
        >
            <div class="px-4 py-5 sm:p-6">
                <div class="flex items-center justify-between">
                    <h3 class="meeting-title text-lg leading-6 font-medium text-gray-900 truncate">
                        {meeting.title}
                    </h3>
                    <span
                        class="participant-badge inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800"
                        data-count=participants.to_string()
                    >
                        {format!("{participants} Participants")}
                    </span>
                </div>
                <div class="mt-2 max-w-xl text-sm text-gray-500">
                    <p>
                        <i data-lucide="clock" class="inline w-4 h-4 mr-1"></i>
                        <span class="meeting-time">{time}</span>
                    </p>
                </div>
                <div class="mt-4">
                    <div class="flex flex-wrap gap-2">{tags}</div>
                </div>
            </div>
        </a>
    }
}
