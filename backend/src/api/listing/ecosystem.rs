//! Ecosystem listings: organisations and policies.
//!
//! The content source may expose these as dedicated post types with
//! their own filter parameters; when it does not, the request falls back
//! to the generic records endpoint with a fixed category and the unioned
//! tag list.

use common::content_item::ListingPage;
use common::ecosystem::{ContentTypeSupport, EcosystemKind};
use common::listing_query::{FilterCategory, ListingQuery};
use common::site_const::{ORGANISATIONS_CATEGORY_ID, POLICIES_CATEGORY_ID};

use crate::api::listing::fetch_listing_page::parse_totals;
use crate::api::listing::query_params::{base_page_params, join_tags};
use crate::content_source::client::get_with_totals;
use crate::content_source::wire::{WireRecord, parse_records};

pub async fn fetch_ecosystem_page(
    kind: EcosystemKind,
    query: ListingQuery,
    page: u64,
    support: ContentTypeSupport,
) -> anyhow::Result<ListingPage> {
    let page = page.max(1);
    let (endpoint, params) = build_ecosystem_request(kind, &query, page, support);
    let fetched = get_with_totals(endpoint, &params).await?;

    let records = parse_records(&fetched.body)?;
    let (total_items, total_pages) =
        parse_totals(fetched.total_items.as_deref(), fetched.total_pages.as_deref());

    Ok(ListingPage {
        items: records.into_iter().map(WireRecord::into_content_item).collect(),
        total_items,
        total_pages,
        page_number: page,
    })
}

pub fn build_ecosystem_request(
    kind: EcosystemKind,
    query: &ListingQuery,
    page: u64,
    support: ContentTypeSupport,
) -> (&'static str, Vec<(String, String)>) {
    let mut params = base_page_params(page);

    let has_custom_type = match kind {
        EcosystemKind::Organisations => support.organisation,
        EcosystemKind::Policies => support.policy,
    };

    if has_custom_type {
        // dedicated post type: its own filter parameters, no tags
        let (endpoint, kind_category) = match kind {
            EcosystemKind::Organisations => ("organisation", FilterCategory::OrganisationType),
            EcosystemKind::Policies => ("policy", FilterCategory::ResourceType),
        };
        let kind_param = match kind {
            EcosystemKind::Organisations => "organisation_type",
            EcosystemKind::Policies => "resource_type",
        };

        let kind_value = query.single_value(kind_category);
        if kind_value != "all" {
            params.push((kind_param.to_string(), kind_value));
        }
        let country = query.single_value(FilterCategory::Country);
        if country != "all" {
            params.push(("country".to_string(), country));
        }
        return (endpoint, params);
    }

    // fallback: generic records in a fixed category, filters as tags
    let category_id = match kind {
        EcosystemKind::Organisations => ORGANISATIONS_CATEGORY_ID,
        EcosystemKind::Policies => POLICIES_CATEGORY_ID,
    };
    params.push(("categories".to_string(), category_id.to_string()));

    let tags = query.tag_ids();
    if !tags.is_empty() {
        params.push(("tags".to_string(), join_tags(&tags)));
    }
    ("posts", params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn custom_type_uses_its_own_params() {
        let mut query = ListingQuery::default();
        query.set_single(FilterCategory::OrganisationType, "ngo");
        query.set_single(FilterCategory::Country, "ghana");
        let support = ContentTypeSupport { organisation: true, policy: false };

        let (endpoint, params) =
            build_ecosystem_request(EcosystemKind::Organisations, &query, 1, support);
        assert_eq!(endpoint, "organisation");
        assert_eq!(param(&params, "organisation_type"), Some("ngo"));
        assert_eq!(param(&params, "country"), Some("ghana"));
        assert!(param(&params, "tags").is_none());
        assert!(param(&params, "categories").is_none());
    }

    #[test]
    fn fallback_unions_filters_into_tags() {
        let mut query = ListingQuery::default();
        query.set_single(FilterCategory::OrganisationType, "government");
        query.set_single(FilterCategory::Country, "nigeria");

        let (endpoint, params) = build_ecosystem_request(
            EcosystemKind::Organisations,
            &query,
            1,
            ContentTypeSupport::default(),
        );
        assert_eq!(endpoint, "posts");
        assert_eq!(param(&params, "categories"), Some("35"));
        assert_eq!(param(&params, "tags"), Some("103,201"));
    }

    #[test]
    fn policies_fallback_category() {
        let mut query = ListingQuery::default();
        query.set_single(FilterCategory::ResourceType, "research");

        let (endpoint, params) = build_ecosystem_request(
            EcosystemKind::Policies,
            &query,
            2,
            ContentTypeSupport::default(),
        );
        assert_eq!(endpoint, "posts");
        assert_eq!(param(&params, "categories"), Some("37"));
        assert_eq!(param(&params, "tags"), Some("304"));
        assert_eq!(param(&params, "page"), Some("2"));
    }

    #[test]
    fn unfiltered_fallback_has_no_tags_param() {
        let (_, params) = build_ecosystem_request(
            EcosystemKind::Policies,
            &ListingQuery::default(),
            1,
            ContentTypeSupport::default(),
        );
        assert!(param(&params, "tags").is_none());
    }
}
