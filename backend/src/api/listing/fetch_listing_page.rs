//! One listing fetch cycle: parameters in, page of records out.

use common::content_item::ListingPage;
use common::listing_query::ListingQuery;

use crate::api::listing::build_listing_params;
use crate::content_source::client::get_with_totals;
use crate::content_source::wire::{WireRecord, parse_records};

/// Fetch one page of the generic records listing. Exactly one request,
/// no retries; any transport, status, or parse failure surfaces as a
/// single error whose message the caller shows verbatim. An out-of-range
/// page comes back as an empty page, not an error.
pub async fn fetch_listing_page(query: ListingQuery, page: u64) -> anyhow::Result<ListingPage> {
    let page = page.max(1);
    let params = build_listing_params(&query, page);
    let fetched = get_with_totals("posts", &params).await?;

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

/// Totals arrive out-of-band in response headers; missing or garbled
/// headers count as zero rather than failing the fetch.
pub(crate) fn parse_totals(total_items: Option<&str>, total_pages: Option<&str>) -> (u64, u64) {
    let items = total_items.and_then(|value| value.parse().ok()).unwrap_or(0);
    let pages = total_pages.and_then(|value| value.parse().ok()).unwrap_or(0);
    (items, pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_from_headers() {
        assert_eq!(parse_totals(Some("14"), Some("3")), (14, 3));
    }

    #[test]
    fn missing_headers_mean_zero() {
        assert_eq!(parse_totals(None, None), (0, 0));
    }

    #[test]
    fn garbled_headers_mean_zero() {
        assert_eq!(parse_totals(Some("lots"), Some("-2")), (0, 0));
    }
}
