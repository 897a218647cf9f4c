//! The "New Meeting" trigger
//!
//! Without scripting the title prompt is a text field; submitting it runs the
//! creation flow on the server and comes back to the page it was sent from.

use leptos::prelude::*;

use crate::dashboard::TITLE_PROMPT;
use crate::page::Location;

/// Where the form posts to
pub const NEW_MEETING_ACTION: &str = "/meetings/new";

/// Title field plus "New Meeting" button
#[component]
pub fn NewMeetingForm(
    /// Page to come back to after submitting
    location: Location,
) -> impl IntoView {
    view! {
        <form
            class="new-meeting-form inline-flex items-center gap-2"
            method="post"
            action=NEW_MEETING_ACTION
        >
            <input type="hidden" name="return_to" value=location.path_and_query()/>
            <input
                type="text"
                name="title"
                placeholder=TITLE_PROMPT
                aria-label=TITLE_PROMPT
                class="rounded-md border border-gray-300 px-3 py-2 text-sm"
            />
            <button
                type="submit"
                class="inline-flex items-center px-4 py-2 border border-transparent shadow-sm text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700"
            >
                <i data-lucide="plus" class="-ml-1 mr-2 h-5 w-5"></i>
                "New Meeting"
            </button>
        </form>
    }
}
