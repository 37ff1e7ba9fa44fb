//! Content Collection
//!
//! The article set and site configuration, loaded once at startup and
//! read-only afterwards.

use std::collections::{HashMap, HashSet};

use crate::article::{Article, ArticleId};
use crate::entity::{ContentError, ContentResult, Entity};
use crate::site::SiteConfig;

#[derive(Debug, Clone)]
pub struct ContentCollection {
    articles: Vec<Article>,
    index: HashMap<ArticleId, usize>,
    important: Vec<usize>,
    site: SiteConfig,
}

impl ContentCollection {
    /// Parse and validate both JSON documents.
    pub fn from_json(articles_json: &str, site_json: &str) -> ContentResult<Self> {
        let articles: Vec<Article> = serde_json::from_str(articles_json)
            .map_err(|source| ContentError::Json { what: "articles", source })?;
        let site: SiteConfig = serde_json::from_str(site_json)
            .map_err(|source| ContentError::Json { what: "site config", source })?;
        Self::new(articles, site)
    }

    pub fn new(mut articles: Vec<Article>, site: SiteConfig) -> ContentResult<Self> {
        let mut index = HashMap::with_capacity(articles.len());
        let mut titles = HashSet::new();

        for (position, article) in articles.iter_mut().enumerate() {
            if index.insert(article.id(), position).is_some() {
                return Err(ContentError::DuplicateId(article.id()));
            }
            if let Some(orphan) = article.first_orphan_image() {
                return Err(ContentError::ImageOutOfRange {
                    id: article.id(),
                    index: orphan,
                    paragraphs: article.full_content.len(),
                });
            }
            article.trim_image_padding();
            if !titles.insert(article.title.clone()) {
                log::warn!("[CONTENT] duplicate title {:?} (article {})", article.title, article.id);
            }
        }

        let important = site
            .important
            .iter()
            .map(|id| index.get(id).copied().ok_or_else(|| ContentError::UnknownArticle(id.clone())))
            .collect::<ContentResult<Vec<_>>>()?;

        log::info!(
            "[CONTENT] loaded {} articles, {} top stories",
            articles.len(),
            important.len()
        );

        Ok(Self {
            articles,
            index,
            important,
            site,
        })
    }

    /// All articles in declared order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: &ArticleId) -> Option<&Article> {
        self.index.get(id).map(|&i| &self.articles[i])
    }

    /// Top stories in configured order
    pub fn important(&self) -> Vec<&Article> {
        self.important.iter().map(|&i| &self.articles[i]).collect()
    }

    /// Fixed ticker list when configured, otherwise the top-story titles.
    pub fn ticker_headlines(&self) -> Vec<String> {
        match &self.site.ticker {
            Some(headlines) => headlines.clone(),
            None => self.important().into_iter().map(|a| a.title.clone()).collect(),
        }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }
}
