//! Rendered views
//!
//! Components are leptos views rendered to HTML on the server. Leptos escapes
//! text and attribute values on output, so titles and tags from the backend
//! never turn into markup. A [`Markup`] is one rendered fragment, the unit a
//! [`Page`](crate::page::Page) mounts.

use leptos::prelude::*;
use std::fmt;

/// An HTML fragment rendered from a view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Render a view to HTML
    pub fn render(view: impl IntoView) -> Self {
        Self(view.to_html())
    }

    /// The HTML text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the HTML text
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a complete HTML document
pub fn render_document(root: impl IntoView) -> String {
    format!("<!DOCTYPE html>{}", root.to_html())
}


#[cfg(test)]
mod tests {
    use super::query::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_is_escaped() {
        let title = "<script>alert('x')</script> & co".to_string();
        let html = Markup::render(view! { <h3 class="title">{title}</h3> });

        assert!(!html.as_str().contains("<script>"));
        assert!(html.as_str().contains("&lt;script&gt;"));
        assert!(html.as_str().contains("&amp; co"));
    }

    #[test]
    fn test_attribute_is_escaped() {
        let href = r#"/x?a=1" onclick="evil"#.to_string();
        let html = Markup::render(view! { <a href=href>"link"</a> });

        assert!(!html.as_str().contains(r#"onclick="evil""#));
    }

    #[test]
    fn test_queries() {
        let html = Markup::render(view! {
            <div id="root" class="grid">
                <span class="tag primary">"one"</span>
                <div><span class="tag" data-n="2">"two"</span></div>
            </div>
        });
        let html = html.as_str();

        assert_eq!(count_class(html, "tag"), 2);
        assert_eq!(count_class(html, "primary"), 1);
        assert_eq!(count_class(html, "ta"), 0);
        assert_eq!(texts_by_class(html, "tag"), vec!["one", "two"]);
        assert_eq!(attr_values(html, "data-n"), vec!["2"]);
        assert!(has_id(html, "root"));
        assert!(!has_id(html, "missing"));
    }

    #[test]
    fn test_render_document_prefix() {
        let html = render_document(view! { <html lang="en"></html> });
        assert!(html.starts_with("<!DOCTYPE html><html"));
    }
}
