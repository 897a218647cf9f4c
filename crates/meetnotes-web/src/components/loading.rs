//! Placeholder grid shown while meetings load

use leptos::prelude::*;

/// Id of the grid element that receives meeting cards
pub const MEETINGS_GRID_ID: &str = "meetings-grid";

/// The meetings grid around `content`; empty while the list is loading
pub fn meetings_grid(content: impl IntoView) -> impl IntoView {
    view! {
        <div
            id=MEETINGS_GRID_ID
            class="meetings-grid grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3"
        >
            {content}
        </div>
    }
}
