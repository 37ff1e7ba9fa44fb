//! News Article Row Component
//!
//! Compact list entry with a thumbnail.

use leptos::prelude::*;
use nummi_content::{Article, ArticleId};

#[component]
pub fn NewsArticleRow(article: Article, on_select: Callback<ArticleId>) -> impl IntoView {
    let id = article.id.clone();

    view! {
        <div class="news-article-row" on:click=move |_| on_select.run(id.clone())>
            <div class="article-details">
                <span class="category-tag-list">{article.category}</span>
                <h4 class="article-title">{article.title.clone()}</h4>
            </div>
            <div class="article-image-container">
                <img src=article.image_url alt=article.title class="article-thumbnail" />
            </div>
        </div>
    }
}
