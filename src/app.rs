//! NummiNews Frontend App
//!
//! Root composition: owns the intro and selection state and swaps between
//! the front page and the article view.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use nummi_content::{ArticleId, ContentCollection};
use reactive_stores::Store;

use crate::components::{ArticleView, Header, IntroSplash, NewsArticleRow, NewsCard, NewsSection, Ticker};
use crate::context::{use_news_context, NewsContext};
use crate::store::NewsState;

#[component]
pub fn App(content: ContentCollection) -> impl IntoView {
    let intro_duration_ms = content.site().intro_duration_ms;
    let store = Store::new(NewsState::new());
    let ctx = NewsContext::new(content, store);

    // Provide context to all children
    provide_context(ctx);

    // One-shot intro dismissal, cancelled if the root goes away first
    let intro_timer = Timeout::new(intro_duration_ms, move || {
        let mut dismissed = false;
        store.update(|state: &mut NewsState| dismissed = state.dismiss_intro());
        if dismissed {
            log::info!("[APP] intro dismissed after {}ms", intro_duration_ms);
        }
    });
    let pending_timer = StoredValue::new_local(Some(intro_timer));
    on_cleanup(move || {
        // Dropping a pending Timeout clears it
        pending_timer.try_update_value(Option::take);
    });

    let phase = Memo::new(move |_| store.with(NewsState::phase));
    let viewing_article = Signal::derive(move || phase.get().shows_detail());

    view! {
        <div class="app-container">
            <Show when=move || phase.get().shows_splash()>
                <IntroSplash />
            </Show>
            <div class=move || phase.get().wrapper_class()>
                <Header />
                <Ticker retracted=viewing_article />
                <main class="main-content">
                    <div class=move || phase.get().column_class()>
                        {move || match ctx.selected_article() {
                            Some(article) => {
                                let on_close = Callback::new(move |_: ()| ctx.close_article());
                                view! { <ArticleView article=article on_close=on_close /> }.into_any()
                            }
                            None => view! { <FrontPage /> }.into_any(),
                        }}
                    </div>
                </main>
            </div>
        </div>
    }
}

/// Top-story cards followed by the full article list
#[component]
fn FrontPage() -> impl IntoView {
    let ctx = use_news_context();
    let (top_title, all_title, top_stories, all_news) = ctx.with_content(|content| {
        (
            content.site().top_stories_title.clone(),
            content.site().all_news_title.clone(),
            content.important().into_iter().cloned().collect::<Vec<_>>(),
            content.articles().to_vec(),
        )
    });
    let on_select = Callback::new(move |id: ArticleId| ctx.select_article(id));

    view! {
        <NewsSection title=top_title modifier="important-news-section">
            <For
                each=move || top_stories.clone()
                key=|article| article.id.clone()
                children=move |article| view! { <NewsCard article=article on_select=on_select /> }
            />
        </NewsSection>
        <NewsSection title=all_title modifier="all-news-section">
            <For
                each=move || all_news.clone()
                key=|article| article.id.clone()
                children=move |article| view! { <NewsArticleRow article=article on_select=on_select /> }
            />
        </NewsSection>
    }
}

/// Shown instead of the site when the embedded content is invalid
#[component]
pub fn ContentErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="content-error">
            <h1>"NummiNews"</h1>
            <p>{message}</p>
        </div>
    }
}
