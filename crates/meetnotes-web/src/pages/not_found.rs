//! 404 Not Found page

use leptos::prelude::*;

/// Content for paths this server does not render
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found text-center py-12">
            <h2 class="text-lg font-medium text-gray-900">"Page Not Found"</h2>
            <p class="mt-1 text-sm text-gray-500">"The page you are looking for does not exist."</p>
            <a class="mt-4 inline-block text-indigo-600 underline" href="/">"Return to Dashboard"</a>
        </div>
    }
}
