//! Call-to-action shown when there are no meetings

use leptos::prelude::*;

use crate::components::new_meeting_form::NewMeetingForm;
use crate::page::Location;

/// Class marking the empty-state block
pub const EMPTY_STATE_CLASS: &str = "empty-state";

/// "No meetings" block with a button to create the first one
#[component]
pub fn EmptyState(
    /// Page the creation form returns to
    location: Location,
) -> impl IntoView {
    view! {
        <div class="empty-state col-span-full text-center py-12 bg-white rounded-lg border border-gray-200 shadow-sm">
            <i data-lucide="calendar" class="mx-auto h-12 w-12 text-gray-400"></i>
            <h3 class="mt-2 text-sm font-medium text-gray-900">"No meetings"</h3>
            <p class="mt-1 text-sm text-gray-500">"Get started by creating a new meeting."</p>
            <div class="mt-6">
                <NewMeetingForm location/>
            </div>
        </div>
    }
}
