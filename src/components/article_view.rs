//! Article View Component
//!
//! Full reading view: metadata, lead image, then paragraphs with their
//! inline images in order.

use leptos::prelude::*;
use nummi_content::{Article, BodyBlock};

use crate::context::use_news_context;

#[component]
pub fn ArticleView(article: Article, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_news_context();
    let (back_label, author_label, published_label) = ctx.with_content(|content| {
        let site = content.site();
        (site.back_label.clone(), site.author_label.clone(), site.published_label.clone())
    });
    let blocks = article.body_blocks();

    view! {
        <div class="article-view">
            <button class="back-button" on:click=move |_| on_close.run(())>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <line x1="19" y1="12" x2="5" y2="12"></line>
                    <polyline points="12 19 5 12 12 5"></polyline>
                </svg>
                {back_label}
            </button>
            <header class="article-header">
                <span class="category-tag">{article.category}</span>
                <h1 class="article-view-title">{article.title.clone()}</h1>
                <div class="article-meta">
                    <span>{format!("{}: {}", author_label, article.author)}</span>
                    <span>{format!("{}: {}", published_label, article.published_date)}</span>
                </div>
            </header>
            <img src=article.image_url alt=article.title class="article-main-image" />
            <div class="article-body">
                {blocks
                    .into_iter()
                    .map(|block| match block {
                        BodyBlock::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
                        BodyBlock::Image(src) => {
                            view! { <img src=src alt="" class="article-inline-image" /> }.into_any()
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
