//! Application Context
//!
//! Content and view state shared with every component below the root.

use leptos::prelude::*;
use nummi_content::{Article, ArticleId, ContentCollection};

use crate::store::{NewsState, NewsStateStoreFields, NewsStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct NewsContext {
    content: StoredValue<ContentCollection>,
    pub store: NewsStore,
}

impl NewsContext {
    pub fn new(content: ContentCollection, store: NewsStore) -> Self {
        Self {
            content: StoredValue::new(content),
            store,
        }
    }

    /// Read the (immutable) content collection
    pub fn with_content<R>(&self, f: impl FnOnce(&ContentCollection) -> R) -> R {
        self.content.with_value(f)
    }

    /// Open an article in the detail view
    pub fn select_article(&self, id: ArticleId) {
        log::info!("[APP] open article {}", id);
        self.store.update(|state: &mut NewsState| state.select(id));
    }

    /// Return to the front page
    pub fn close_article(&self) {
        log::info!("[APP] close article");
        self.store.update(|state: &mut NewsState| state.close());
    }

    /// Currently open article (tracks the selection)
    pub fn selected_article(&self) -> Option<Article> {
        let id = self.store.selected().get()?;
        let article = self.with_content(|content| content.get(&id).cloned());
        if article.is_none() {
            log::warn!("[APP] selected article {} is not in the collection", id);
        }
        article
    }
}

/// Get the news context
pub fn use_news_context() -> NewsContext {
    use_context::<NewsContext>().expect("NewsContext should be provided")
}
