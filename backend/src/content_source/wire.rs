//! Wire format of the content source's record responses.

use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use common::content_item::ContentItem;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WireRecord {
    pub id: u64,
    pub slug: String,
    pub link: String,
    pub date: String,
    pub title: WireRendered,
    pub excerpt: WireRendered,
    pub content: WireRendered,
    #[serde(rename = "_embedded")]
    pub embedded: Option<WireEmbedded>,
    pub acf: Option<WireAcf>,
    // custom-post-type fields, absent on plain posts
    pub organisation_type: Option<String>,
    pub resource_type: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WireRendered {
    pub rendered: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WireEmbedded {
    #[serde(rename = "wp:featuredmedia")]
    pub featured_media: Vec<WireMedia>,
    /// Term groups in taxonomy order: categories first, then tags.
    #[serde(rename = "wp:term")]
    pub terms: Vec<Vec<WireTerm>>,
    pub author: Vec<WireAuthor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WireMedia {
    pub source_url: Option<String>,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WireTerm {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WireAuthor {
    pub name: String,
    pub description: String,
    pub avatar_urls: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WireAcf {
    pub podcast_audio_url: Option<String>,
}

impl WireRecord {
    pub fn into_content_item(self) -> ContentItem {
        let embedded = self.embedded.unwrap_or_default();

        let categories = embedded.terms.first();
        let category = categories
            .and_then(|terms| terms.first())
            .map(|term| term.name.clone())
            .unwrap_or_else(|| "Article".to_string());
        let category_id = categories.and_then(|terms| terms.first()).map(|term| term.id);
        let tags = embedded
            .terms
            .get(1)
            .map(|terms| terms.iter().map(|term| term.name.clone()).collect())
            .unwrap_or_default();

        let image_url = embedded
            .featured_media
            .first()
            .and_then(|media| media.source_url.clone());
        let author = embedded.author.first();

        ContentItem {
            id: self.id,
            slug: self.slug,
            link: self.link,
            date: self.date,
            title: self.title.rendered,
            excerpt_html: self.excerpt.rendered,
            content_html: self.content.rendered,
            category,
            category_id,
            tags,
            image_url,
            author_name: author.map(|a| a.name.clone()),
            author_avatar_url: author.and_then(|a| a.avatar_urls.get("96").cloned()),
            author_description: author.map(|a| a.description.clone()),
            organisation_type: self.organisation_type,
            resource_type: self.resource_type,
            country: self.country,
            podcast_audio_field: self.acf.and_then(|acf| acf.podcast_audio_url),
        }
    }
}

/// Parse a record-array response body.
pub fn parse_records(body: &str) -> anyhow::Result<Vec<WireRecord>> {
    serde_json::from_str(body).context("malformed content source response")
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_JSON: &str = r#"[{
        "id": 42,
        "slug": "mobile-money-gap",
        "link": "https://example.org/blog/mobile-money-gap",
        "date": "2024-05-01T10:30:00",
        "title": {"rendered": "The Mobile Money Gap"},
        "excerpt": {"rendered": "<p>Short excerpt.</p>"},
        "content": {"rendered": "<p>Body text.</p>"},
        "_embedded": {
            "wp:featuredmedia": [{"source_url": "https://cdn.example.org/cover.jpg"}],
            "wp:term": [
                [{"id": 3, "name": "Knowledge Base", "slug": "knowledge"}],
                [{"id": 201, "name": "Nigeria", "slug": "nigeria"}, {"id": 403, "name": "Gender", "slug": "gender"}]
            ],
            "author": [{"name": "A. Editor", "description": "Writes things", "avatar_urls": {"96": "https://cdn.example.org/a96.png"}}]
        }
    }]"#;

    #[test]
    fn maps_embedded_fields() {
        let records = parse_records(RECORD_JSON).unwrap();
        assert_eq!(records.len(), 1);
        let item = records.into_iter().next().unwrap().into_content_item();

        assert_eq!(item.id, 42);
        assert_eq!(item.slug, "mobile-money-gap");
        assert_eq!(item.title, "The Mobile Money Gap");
        assert_eq!(item.category, "Knowledge Base");
        assert_eq!(item.category_id, Some(3));
        assert_eq!(item.tags, vec!["Nigeria", "Gender"]);
        assert_eq!(item.image_url.as_deref(), Some("https://cdn.example.org/cover.jpg"));
        assert_eq!(item.author_name.as_deref(), Some("A. Editor"));
        assert_eq!(
            item.author_avatar_url.as_deref(),
            Some("https://cdn.example.org/a96.png")
        );
    }

    #[test]
    fn sparse_record_gets_defaults() {
        let records = parse_records(r#"[{"id": 7, "slug": "bare", "date": "2024-01-01T00:00:00", "title": {"rendered": "Bare"}}]"#).unwrap();
        let item = records.into_iter().next().unwrap().into_content_item();
        assert_eq!(item.category, "Article");
        assert_eq!(item.category_id, None);
        assert!(item.tags.is_empty());
        assert!(item.image_url.is_none());
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_records("<html>504</html>").is_err());
    }
}
