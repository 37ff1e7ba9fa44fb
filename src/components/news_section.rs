//! News Section Component

use leptos::prelude::*;

/// Titled container for a run of cards or rows
#[component]
pub fn NewsSection(
    #[prop(into)] title: String,
    /// Extra CSS class for the section (e.g. "important-news-section")
    #[prop(optional, into)]
    modifier: String,
    children: Children,
) -> impl IntoView {
    let section_class = if modifier.is_empty() {
        "news-section".to_string()
    } else {
        format!("news-section {}", modifier)
    };

    view! {
        <section class=section_class>
            <h2 class="section-title">{title}</h2>
            <div class="news-content-wrapper">{children()}</div>
        </section>
    }
}
