//! HTML document wrapping every page

use leptos::prelude::*;

use crate::components::{new_meeting_form::NewMeetingForm, notices::AlertBanner};
use crate::page::Location;
use crate::view::{Markup, render_document};

/// Id of the content area controllers mount into
pub const APP_CONTENT_ID: &str = "app-content";

const TITLE: &str = "Meeting Notes";

/// Full document: header with the "New Meeting" trigger, any alerts, and
/// `content` inside the content area
#[must_use]
pub fn document(location: &Location, alerts: &[String], content: Option<&Markup>) -> String {
    let back_to = location.path_and_query();
    let banners = alerts
        .iter()
        .map(|message| {
            view! { <AlertBanner message=message.clone() back_to=back_to.clone()/> }
        })
        .collect::<Vec<_>>();
    let content = content.map(Markup::as_str).unwrap_or_default().to_string();
    let location = location.clone();

    render_document(view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{TITLE}</title>
                <script src="https://cdn.tailwindcss.com"></script>
                <script src="https://unpkg.com/lucide@latest"></script>
            </head>
            <body class="bg-gray-50 min-h-screen">
                <header class="bg-white shadow">
                    <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 flex items-center justify-between">
                        <h1 class="text-3xl font-bold text-gray-900">
                            <a href="/">{TITLE}</a>
                        </h1>
                        <NewMeetingForm location/>
                    </div>
                </header>
                <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                    {banners}
                    <div id=APP_CONTENT_ID inner_html=content></div>
                </main>
                <script>"lucide.createIcons();"</script>
            </body>
        </html>
    })
}
