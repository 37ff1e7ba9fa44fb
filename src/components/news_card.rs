//! News Card Component
//!
//! Top-story tile: image background, category, title and snippet.

use leptos::prelude::*;
use nummi_content::{Article, ArticleId};

use crate::style::card_background;

#[component]
pub fn NewsCard(article: Article, on_select: Callback<ArticleId>) -> impl IntoView {
    let id = article.id.clone();
    let background = card_background(&article.image_url);

    view! {
        <div class="news-card" style=background on:click=move |_| on_select.run(id.clone())>
            <div class="card-content">
                <span class="category-tag">{article.category}</span>
                <h3 class="card-title">{article.title}</h3>
                <p class="card-snippet">{article.snippet.unwrap_or_default()}</p>
            </div>
        </div>
    }
}
