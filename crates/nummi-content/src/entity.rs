//! Content Layer - Core Entity Trait
//!
//! Every record in the content collection is addressed by a stable id,
//! never by its display text.

use thiserror::Error;

use crate::article::ArticleId;

/// Core trait for content entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for content loading
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors raised while loading the embedded content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate article id `{0}`")]
    DuplicateId(ArticleId),

    #[error("unknown article id `{0}`")]
    UnknownArticle(ArticleId),

    #[error("article `{id}` has an image at position {index} but only {paragraphs} paragraphs")]
    ImageOutOfRange {
        id: ArticleId,
        index: usize,
        paragraphs: usize,
    },
}
