//! Listing result models.

use serde::{Deserialize, Serialize};

use crate::{dates, read_time};

/// One page of records plus the totals read from the content source's
/// response headers. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub items: Vec<ContentItem>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page_number: u64,
}

impl ListingPage {
    /// The state callers fall back to after a failed fetch.
    pub fn empty() -> Self {
        ListingPage {
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            page_number: 1,
        }
    }

    /// 1-based index of the first record on this page, for the
    /// "Showing X-Y of Z Results" line.
    pub fn first_result_index(&self, page_size: u64) -> u64 {
        (self.page_number - 1) * page_size + 1
    }

    pub fn last_result_index(&self, page_size: u64) -> u64 {
        (self.page_number * page_size).min(self.total_items)
    }
}

/// One content record, mapped from the content source's wire format.
/// Listing code treats this as opaque; the display helpers below are for
/// the rendering layer only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentItem {
    pub id: u64,
    pub slug: String,
    pub link: String,
    pub date: String,
    pub title: String,
    pub excerpt_html: String,
    pub content_html: String,
    /// First category label, or "Article" when the record has none.
    pub category: String,
    /// Identifier of the first category, used to fetch related records.
    pub category_id: Option<u64>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub author_name: Option<String>,
    pub author_avatar_url: Option<String>,
    pub author_description: Option<String>,
    /// Custom-field values present only on organisation/policy records.
    pub organisation_type: Option<String>,
    pub resource_type: Option<String>,
    pub country: Option<String>,
    pub podcast_audio_field: Option<String>,
}

const COUNTRY_TAG_LABELS: &[&str] = &["Nigeria", "Ghana", "Kenya", "South Africa"];
const RESOURCE_TYPE_TAG_LABELS: &[&str] = &["Policy", "Programme", "Report", "Research"];

impl ContentItem {
    pub fn display_date(&self) -> String {
        dates::display_date(&self.date)
    }

    pub fn read_time_minutes(&self) -> u64 {
        read_time::read_time_minutes(&self.content_html)
    }

    /// Country shown on an organisation card: the custom field when the
    /// record came from a custom post type, else the first country tag.
    pub fn country_label(&self) -> Option<String> {
        if let Some(country) = &self.country {
            return Some(country.clone());
        }
        self.tags
            .iter()
            .find(|tag| COUNTRY_TAG_LABELS.contains(&tag.as_str()))
            .cloned()
    }

    pub fn organisation_type_label(&self) -> String {
        self.organisation_type
            .clone()
            .unwrap_or_else(|| self.category.clone())
    }

    /// Resource-type chip on a policy card: custom field, else the first
    /// matching tag, else the category label.
    pub fn resource_type_label(&self) -> String {
        if let Some(resource_type) = &self.resource_type {
            return resource_type.clone();
        }
        self.tags
            .iter()
            .find(|tag| RESOURCE_TYPE_TAG_LABELS.contains(&tag.as_str()))
            .cloned()
            .unwrap_or_else(|| self.category.clone())
    }

    pub fn plain_excerpt(&self, max_chars: usize) -> String {
        let text = read_time::strip_tags(&self.excerpt_html);
        let trimmed = text.trim();
        trimmed.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_zero_totals() {
        let page = ListingPage::empty();
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn result_index_range() {
        let page = ListingPage {
            items: Vec::new(),
            total_items: 14,
            total_pages: 3,
            page_number: 3,
        };
        assert_eq!(page.first_result_index(6), 13);
        assert_eq!(page.last_result_index(6), 14);
    }

    #[test]
    fn country_label_prefers_custom_field() {
        let item = ContentItem {
            country: Some("Kenya".to_string()),
            tags: vec!["Nigeria".to_string()],
            ..Default::default()
        };
        assert_eq!(item.country_label().as_deref(), Some("Kenya"));
    }

    #[test]
    fn country_label_falls_back_to_tags() {
        let item = ContentItem {
            tags: vec!["Banking".to_string(), "Ghana".to_string()],
            ..Default::default()
        };
        assert_eq!(item.country_label().as_deref(), Some("Ghana"));
    }

    #[test]
    fn resource_type_label_from_tags() {
        let item = ContentItem {
            category: "Policies".to_string(),
            tags: vec!["Research".to_string()],
            ..Default::default()
        };
        assert_eq!(item.resource_type_label(), "Research");
    }
}
