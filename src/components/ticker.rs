//! Ticker Component
//!
//! Scrolling headline strip. Purely visual.

use leptos::prelude::*;

use crate::context::use_news_context;
use crate::ticker::ticker_entries;

#[component]
pub fn Ticker(
    /// Tucked away while an article is open
    retracted: Signal<bool>,
) -> impl IntoView {
    let ctx = use_news_context();
    let entries = ticker_entries(&ctx.with_content(|content| content.ticker_headlines()));

    view! {
        <div class="ticker-bar" class:retracted=move || retracted.get()>
            <div class="ticker-content">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <span class="ticker-item" aria-hidden=entry.hidden.then_some("true")>
                                {entry.text}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
