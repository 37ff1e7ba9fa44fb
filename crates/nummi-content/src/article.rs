//! Article Entity
//!
//! One news item: metadata, body paragraphs, and inline images aligned
//! positionally with the paragraphs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Stable article identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A news article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub snippet: Option<String>,
    /// Remote URL or inline `data:` payload, never inspected
    pub image_url: String,
    pub author: String,
    /// Display string only, not a parsed date
    pub published_date: String,
    #[serde(default)]
    pub full_content: Vec<String>,
    /// `images[i]` is shown right after paragraph `i`
    #[serde(default)]
    pub images: Vec<Option<String>>,
}

/// One element of the article reading view, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyBlock {
    Paragraph(String),
    Image(String),
}

impl Article {
    /// Image following paragraph `index`; null, empty and missing entries are all absent.
    pub fn inline_image(&self, index: usize) -> Option<&str> {
        self.images
            .get(index)
            .and_then(|img| img.as_deref())
            .filter(|src| !src.is_empty())
    }

    /// Paragraphs in order, each followed by its inline image when one is set.
    pub fn body_blocks(&self) -> Vec<BodyBlock> {
        let mut blocks = Vec::with_capacity(self.full_content.len() * 2);
        for (index, paragraph) in self.full_content.iter().enumerate() {
            blocks.push(BodyBlock::Paragraph(paragraph.clone()));
            if let Some(src) = self.inline_image(index) {
                blocks.push(BodyBlock::Image(src.to_string()));
            }
        }
        blocks
    }

    /// Position of the first real image that has no paragraph to follow.
    pub(crate) fn first_orphan_image(&self) -> Option<usize> {
        (self.full_content.len()..self.images.len()).find(|&i| self.inline_image(i).is_some())
    }

    /// Drop padding entries past the last paragraph.
    pub(crate) fn trim_image_padding(&mut self) {
        self.images.truncate(self.full_content.len());
    }
}

impl Entity for Article {
    type Id = ArticleId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
