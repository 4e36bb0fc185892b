//! Page-level view state carried in the address bar.
//!
//! Pages receive these as explicit route parameters and navigate by
//! pushing a new route; nothing reads or writes ambient URL state.

use serde::{Deserialize, Serialize};

use common::ecosystem::EcosystemKind;
use common::listing_query::ListingQuery;

/// Which half of the resource centre is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ResourcesTab {
    #[default]
    Internal,
    Ecosystem,
}

/// Everything the resources page needs besides the page number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcesView {
    pub main_tab: ResourcesTab,
    /// Internal tab: category pill selection lives in `query.category`.
    pub query: ListingQuery,
    /// Ecosystem tab: which collection, and its dropdown selections.
    pub kind: EcosystemKind,
    pub ecosystem_query: ListingQuery,
}

/// Content-type pills on the data explorer. The selection is URL state
/// only; the content source query never includes it.
pub const CONTENT_TYPE_TABS: &[(&str, &str)] = &[
    ("all", "Everything"),
    ("stories", "Stories"),
    ("data", "Data"),
    ("snapshots", "Snapshots"),
    ("facts", "Key Facts"),
    ("podcasts", "Podcasts"),
];

/// Everything the data explorer needs besides the page number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerView {
    pub content_type: String,
    pub query: ListingQuery,
}

impl Default for ExplorerView {
    fn default() -> Self {
        ExplorerView {
            content_type: "all".to_string(),
            query: ListingQuery::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_definitions::url_param::UrlParam;

    #[test]
    fn resources_view_round_trips_through_url() {
        let mut view = ResourcesView::default();
        view.main_tab = ResourcesTab::Ecosystem;
        view.kind = EcosystemKind::Policies;
        view.ecosystem_query
            .set_single(common::listing_query::FilterCategory::Country, "nigeria");

        let segment = UrlParam::from(view.clone()).to_string();
        let parsed: UrlParam<ResourcesView> = segment.parse().unwrap();
        assert_eq!(parsed.0, view);
    }

    #[test]
    fn explorer_view_defaults_to_everything() {
        let view = ExplorerView::default();
        assert_eq!(view.content_type, "all");
        assert!(view.query.is_unfiltered());
    }
}
