//! User-visible failure messages

use leptos::prelude::*;

/// Inline message replacing the content area when the list cannot be loaded
#[component]
pub fn ErrorNotice(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="error-notice text-red-500 text-center">{message}</div> }
}

/// Blocking notification, rendered above the page content
#[component]
pub fn AlertBanner(
    /// Alert text
    #[prop(into)]
    message: String,
    /// Link target of the "Back" button
    #[prop(into)]
    back_to: String,
) -> impl IntoView {
    view! {
        <div class="alert-banner rounded-md bg-red-50 p-4 mb-6 text-sm text-red-800" role="alert">
            <p class="font-medium">{message}</p>
            <a class="mt-2 inline-block underline" href=back_to>"Back"</a>
        </div>
    }
}
