//! Metadata override input and the synthesized document.

use serde::Serialize;
use serde_json::Value;

/// Partial metadata a page may supply. Unset fields fall back to the
/// language defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub image: Option<String>,
    pub canonical: Option<String>,
    pub is_article: bool,
    pub no_index: bool,
}

impl MetadataOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical = Some(canonical.into());
        self
    }

    pub fn article(mut self) -> Self {
        self.is_article = true;
        self
    }

    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    /// Language code, or `x-default`
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: &'static str,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub site_name: &'static str,
    pub locale: &'static str,
    pub alternate_locales: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Everything the document head needs for one route in one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataDocument {
    /// Value of `<html lang>`
    pub html_lang: &'static str,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: &'static str,
    pub robots: &'static str,
    pub canonical: String,
    pub alternates: Vec<AlternateLink>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    /// JSON-LD payloads, one script block each
    pub structured_data: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_default_is_empty() {
        let o = MetadataOverride::new();
        assert!(o.title.is_none());
        assert!(o.canonical.is_none());
        assert!(!o.is_article);
        assert!(!o.no_index);
    }

    #[test]
    fn test_override_builder() {
        let o = MetadataOverride::new()
            .title("Projects")
            .keywords("rust, axum")
            .image("/images/cover.png")
            .canonical("https://alexmorgan.dev/projects")
            .article()
            .no_index();

        assert_eq!(o.title.as_deref(), Some("Projects"));
        assert_eq!(o.keywords.as_deref(), Some("rust, axum"));
        assert_eq!(o.image.as_deref(), Some("/images/cover.png"));
        assert!(o.is_article);
        assert!(o.no_index);
        assert!(o.description.is_none());
    }

    #[test]
    fn test_open_graph_type_serializes_as_type() {
        let og = OpenGraph {
            og_type: "website",
            title: "t".to_string(),
            description: "d".to_string(),
            url: "u".to_string(),
            image: "i".to_string(),
            site_name: "s",
            locale: "en_US",
            alternate_locales: vec!["es_ES"],
        };
        let json = serde_json::to_value(&og).unwrap();
        assert_eq!(json["type"], "website");
    }
}
