//! Shared listing query model and the declarative filter tables.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One filter axis shown in the UI. The variant order fixes the order in
/// which selected tags are emitted into the combined `tags` parameter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FilterCategory {
    Theme,
    MediaType,
    OrganisationType,
    ResourceType,
    Country,
}

/// One selectable option within a filter category. `tag` is the opaque
/// identifier the content source filters by; options with `tag: None`
/// (the "all" entries) never contribute to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub tag: Option<u64>,
}

const THEME_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "enrolment", label: "Enrolment barriers", tag: Some(401) },
    FilterOption { value: "funding", label: "Funding challenges", tag: Some(402) },
    FilterOption { value: "gender", label: "Gender", tag: Some(403) },
    FilterOption { value: "policy", label: "Policy/Regulatory gaps", tag: Some(404) },
    FilterOption { value: "service", label: "Service delivery", tag: Some(405) },
];

const MEDIA_TYPE_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "news", label: "News", tag: Some(501) },
    FilterOption { value: "podcast", label: "Podcast", tag: Some(502) },
    FilterOption { value: "snapshot", label: "Snapshot", tag: Some(503) },
    FilterOption { value: "story", label: "Story", tag: Some(504) },
    FilterOption { value: "video", label: "Video", tag: Some(505) },
    FilterOption { value: "all", label: "All types", tag: None },
    FilterOption { value: "data", label: "Data Visual", tag: Some(506) },
    FilterOption { value: "fact", label: "Key Fact", tag: Some(507) },
];

const ORGANISATION_TYPE_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "all", label: "", tag: None },
    FilterOption { value: "ngo", label: "NGO", tag: Some(101) },
    FilterOption { value: "financial-institution", label: "Financial Institution", tag: Some(102) },
    FilterOption { value: "government", label: "Government", tag: Some(103) },
    FilterOption { value: "education", label: "Educational Institution", tag: Some(104) },
];

const RESOURCE_TYPE_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "all", label: "", tag: None },
    FilterOption { value: "policy", label: "Policy", tag: Some(301) },
    FilterOption { value: "programme", label: "Programme", tag: Some(302) },
    FilterOption { value: "report", label: "Report", tag: Some(303) },
    FilterOption { value: "research", label: "Research", tag: Some(304) },
];

const COUNTRY_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "all", label: "", tag: None },
    FilterOption { value: "nigeria", label: "Nigeria", tag: Some(201) },
    FilterOption { value: "ghana", label: "Ghana", tag: Some(202) },
    FilterOption { value: "kenya", label: "Kenya", tag: Some(203) },
    FilterOption { value: "south-africa", label: "South Africa", tag: Some(204) },
];

impl FilterCategory {
    pub fn options(self) -> &'static [FilterOption] {
        match self {
            FilterCategory::Theme => THEME_OPTIONS,
            FilterCategory::MediaType => MEDIA_TYPE_OPTIONS,
            FilterCategory::OrganisationType => ORGANISATION_TYPE_OPTIONS,
            FilterCategory::ResourceType => RESOURCE_TYPE_OPTIONS,
            FilterCategory::Country => COUNTRY_OPTIONS,
        }
    }

    /// Tag identifier for one option value. Unknown values and "all"
    /// entries resolve to `None` and are silently skipped by callers.
    pub fn tag_for(self, value: &str) -> Option<u64> {
        self.options()
            .iter()
            .find(|opt| opt.value == value)
            .and_then(|opt| opt.tag)
    }
}

/// One category pill on the internal-resources tab. These map to the
/// content source's `categories` parameter, a separate axis from tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTab {
    pub slug: &'static str,
    pub label: &'static str,
    pub id: Option<u64>,
}

pub const CATEGORY_TABS: &[CategoryTab] = &[
    CategoryTab { slug: "all", label: "All", id: None },
    CategoryTab { slug: "news", label: "News & Announcement", id: Some(1) },
    CategoryTab { slug: "events", label: "Events", id: Some(2) },
    CategoryTab { slug: "knowledge", label: "Knowledge Base", id: Some(3) },
];

pub fn category_id_for(slug: &str) -> Option<u64> {
    CATEGORY_TABS
        .iter()
        .find(|tab| tab.slug == slug)
        .and_then(|tab| tab.id)
}

/// Everything a listing fetch depends on besides the page number.
///
/// Rebuilding the query parameters from an equal `ListingQuery` is
/// deterministic: the filter map is ordered and the emission order is
/// fixed, so the same selection always produces the same request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ListingQuery {
    /// Category tab slug ("all" means no category filter).
    pub category: String,
    /// Free-text search; empty means no search parameter.
    pub search: String,
    /// Selected option values per filter category.
    pub filters: BTreeMap<FilterCategory, BTreeSet<String>>,
}

impl ListingQuery {
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.category_id().is_none()
            && self.tag_ids().is_empty()
    }

    pub fn category_id(&self) -> Option<u64> {
        category_id_for(&self.category)
    }

    /// Union of the tag identifiers of every selected option, across all
    /// categories, in category order. The content source takes these as
    /// one combined identifier list; categories are never sent as
    /// separate parameters.
    pub fn tag_ids(&self) -> Vec<u64> {
        self.filters
            .iter()
            .flat_map(|(category, values)| {
                values.iter().filter_map(|value| category.tag_for(value))
            })
            .collect()
    }

    pub fn selected(&self, category: FilterCategory, value: &str) -> bool {
        self.filters
            .get(&category)
            .map(|values| values.contains(value))
            .unwrap_or(false)
    }

    /// Flip one option value in a category; empty categories are removed
    /// so that an empty selection compares equal to `Default`.
    pub fn toggle(&mut self, category: FilterCategory, value: &str) {
        let values = self.filters.entry(category).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if self.filters.get(&category).is_some_and(|v| v.is_empty()) {
            self.filters.remove(&category);
        }
    }

    /// Replace a category's selection wholesale (checkbox form submit).
    pub fn set_selection<I>(&mut self, category: FilterCategory, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        let values: BTreeSet<String> = values.into_iter().collect();
        if values.is_empty() {
            self.filters.remove(&category);
        } else {
            self.filters.insert(category, values);
        }
    }

    /// Replace a category with a single dropdown value; "all" clears it.
    pub fn set_single(&mut self, category: FilterCategory, value: &str) {
        if value == "all" || value.is_empty() {
            self.filters.remove(&category);
        } else {
            self.filters
                .insert(category, BTreeSet::from([value.to_string()]));
        }
    }

    /// Current single dropdown value for a category ("all" when unset).
    pub fn single_value(&self, category: FilterCategory) -> String {
        self.filters
            .get(&category)
            .and_then(|values| values.iter().next().cloned())
            .unwrap_or_else(|| "all".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_union_across_categories() {
        let mut query = ListingQuery::default();
        query.toggle(FilterCategory::Theme, "gender");
        query.toggle(FilterCategory::MediaType, "podcast");
        assert_eq!(query.tag_ids(), vec![403, 502]);
    }

    #[test]
    fn unknown_values_are_ignored() {
        let mut query = ListingQuery::default();
        query.toggle(FilterCategory::Theme, "gender");
        query.toggle(FilterCategory::Theme, "not-a-theme");
        assert_eq!(query.tag_ids(), vec![403]);
    }

    #[test]
    fn all_entries_carry_no_tag() {
        let mut query = ListingQuery::default();
        query.toggle(FilterCategory::MediaType, "all");
        assert!(query.tag_ids().is_empty());
    }

    #[test]
    fn toggle_twice_restores_default() {
        let mut query = ListingQuery::default();
        query.toggle(FilterCategory::Country, "ghana");
        query.toggle(FilterCategory::Country, "ghana");
        assert_eq!(query, ListingQuery::default());
    }

    #[test]
    fn set_single_all_clears() {
        let mut query = ListingQuery::default();
        query.set_single(FilterCategory::OrganisationType, "ngo");
        assert_eq!(query.tag_ids(), vec![101]);
        assert_eq!(query.single_value(FilterCategory::OrganisationType), "ngo");
        query.set_single(FilterCategory::OrganisationType, "all");
        assert!(query.tag_ids().is_empty());
        assert_eq!(query.single_value(FilterCategory::OrganisationType), "all");
    }

    #[test]
    fn category_tab_ids() {
        assert_eq!(category_id_for("news"), Some(1));
        assert_eq!(category_id_for("knowledge"), Some(3));
        assert_eq!(category_id_for("all"), None);
        assert_eq!(category_id_for("nope"), None);
    }

    #[test]
    fn tag_order_is_stable() {
        let mut a = ListingQuery::default();
        a.toggle(FilterCategory::MediaType, "podcast");
        a.toggle(FilterCategory::Theme, "gender");
        let mut b = ListingQuery::default();
        b.toggle(FilterCategory::Theme, "gender");
        b.toggle(FilterCategory::MediaType, "podcast");
        // insertion order does not matter, category order does
        assert_eq!(a.tag_ids(), b.tag_ids());
    }
}
