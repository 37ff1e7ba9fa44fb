//! UI Components
//!
//! Presentational Leptos components composed by the root `App`.

mod article_view;
mod header;
mod intro_splash;
mod news_article_row;
mod news_card;
mod news_section;
mod ticker;

pub use article_view::ArticleView;
pub use header::Header;
pub use intro_splash::IntroSplash;
pub use news_article_row::NewsArticleRow;
pub use news_card::NewsCard;
pub use news_section::NewsSection;
pub use ticker::Ticker;
