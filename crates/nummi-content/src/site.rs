//! Site Configuration
//!
//! Labels, timings and section composition for the front page.
//! Every field is optional in the JSON source.

use serde::{Deserialize, Serialize};

use crate::article::ArticleId;
use crate::weather::{default_readings, WeatherReading};

/// Two-word brand shown in the header and the intro splash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub first: String,
    pub second: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            first: "Nummi".to_string(),
            second: "News".to_string(),
        }
    }
}

impl Brand {
    pub fn full_name(&self) -> String {
        format!("{}{}", self.first, self.second)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: Brand,
    pub intro_duration_ms: u32,
    pub particle_count: usize,
    pub weather: Vec<WeatherReading>,
    /// Nav link labels; the first one is the active page
    pub navigation: Vec<String>,
    pub top_stories_title: String,
    pub all_news_title: String,
    pub back_label: String,
    pub author_label: String,
    pub published_label: String,
    /// Articles shown as top-story cards, in this order
    pub important: Vec<ArticleId>,
    /// Fixed ticker headlines; when unset the important titles are used
    pub ticker: Option<Vec<String>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            intro_duration_ms: 4500,
            particle_count: 50,
            weather: default_readings(),
            navigation: vec!["Etusivu".to_string(), "Sää".to_string()],
            top_stories_title: "Etusivu".to_string(),
            all_news_title: "Kaikki Uutiset".to_string(),
            back_label: "Takaisin".to_string(),
            author_label: "Kirjoittaja".to_string(),
            published_label: "Julkaistu".to_string(),
            important: Vec::new(),
            ticker: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.intro_duration_ms, 4500);
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.weather.len(), 4);
        assert_eq!(config.brand.full_name(), "NummiNews");
    }

    #[test]
    fn test_partial_override() {
        let config: SiteConfig = serde_json::from_str(
            r#"{ "intro_duration_ms": 1000, "important": ["metro"], "ticker": ["A", "B"] }"#,
        )
        .unwrap();

        assert_eq!(config.intro_duration_ms, 1000);
        assert_eq!(config.important, vec![ArticleId::new("metro")]);
        assert_eq!(config.ticker, Some(vec!["A".to_string(), "B".to_string()]));
        assert_eq!(config.back_label, "Takaisin");
    }
}
