//! Query-parameter construction for listing fetches.

use common::listing_query::ListingQuery;
use common::site_const::PAGE_SIZE;

/// Parameters for one page of the generic records listing.
///
/// Selected filter tags from every category are unioned into a single
/// comma-joined `tags` parameter; the content source treats them as one
/// shared filter axis, and splitting them into per-category parameters
/// would change the result set.
pub fn build_listing_params(query: &ListingQuery, page: u64) -> Vec<(String, String)> {
    let mut params = base_page_params(page);

    if let Some(category_id) = query.category_id() {
        params.push(("categories".to_string(), category_id.to_string()));
    }

    let tags = query.tag_ids();
    if !tags.is_empty() {
        params.push(("tags".to_string(), join_tags(&tags)));
    }

    if !query.search.is_empty() {
        params.push(("search".to_string(), query.search.clone()));
    }

    params
}

/// Parameters every listing request carries: page size, clamped page
/// number, and the embedded media/taxonomy flag.
pub(crate) fn base_page_params(page: u64) -> Vec<(String, String)> {
    vec![
        ("per_page".to_string(), PAGE_SIZE.to_string()),
        ("page".to_string(), page.max(1).to_string()),
        ("_embed".to_string(), "true".to_string()),
    ]
}

pub(crate) fn join_tags(tags: &[u64]) -> String {
    tags.iter()
        .map(|tag| tag.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::listing_query::FilterCategory;

    fn param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn empty_query_sends_only_paging_params() {
        let params = build_listing_params(&ListingQuery::default(), 1);
        let keys: Vec<&str> = params.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["per_page", "page", "_embed"]);
        assert_eq!(param(&params, "per_page"), Some("6"));
        assert_eq!(param(&params, "page"), Some("1"));
    }

    #[test]
    fn filters_from_two_categories_share_one_tags_param() {
        let mut query = ListingQuery::default();
        query.toggle(FilterCategory::Theme, "gender");
        query.toggle(FilterCategory::MediaType, "podcast");

        let params = build_listing_params(&query, 1);
        let tags: Vec<_> = params.iter().filter(|(key, _)| key == "tags").collect();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].1, "403,502");
    }

    #[test]
    fn search_and_category_are_separate_params() {
        let mut query = ListingQuery::default();
        query.category = "news".to_string();
        query.search = "savings".to_string();

        let params = build_listing_params(&query, 2);
        assert_eq!(param(&params, "categories"), Some("1"));
        assert_eq!(param(&params, "search"), Some("savings"));
        assert_eq!(param(&params, "page"), Some("2"));
        assert!(param(&params, "tags").is_none());
    }

    #[test]
    fn page_is_clamped_to_one() {
        let params = build_listing_params(&ListingQuery::default(), 0);
        assert_eq!(param(&params, "page"), Some("1"));
    }

    #[test]
    fn rebuilding_is_deterministic() {
        let mut query = ListingQuery::default();
        query.toggle(FilterCategory::Country, "kenya");
        query.toggle(FilterCategory::Theme, "funding");
        query.search = "agents".to_string();

        assert_eq!(
            build_listing_params(&query, 3),
            build_listing_params(&query.clone(), 3)
        );
    }
}
