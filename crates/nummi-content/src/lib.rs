//! NummiNews Content
//!
//! Article records and site configuration, decoupled from the view layer.
//! No browser dependencies; everything here is plain data plus validation.

mod article;
mod collection;
mod entity;
mod site;
mod weather;

pub use article::{Article, ArticleId, BodyBlock};
pub use collection::ContentCollection;
pub use entity::{ContentError, ContentResult, Entity};
pub use site::{Brand, SiteConfig};
pub use weather::{default_readings, WeatherReading};
