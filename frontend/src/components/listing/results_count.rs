//! "Showing X-Y of Z Results" line.

use dioxus::prelude::*;

use common::content_item::ListingPage;
use common::site_const::PAGE_SIZE;

#[component]
pub fn ResultsCount(is_loading: bool, page: ListingPage) -> Element {
    let text = if is_loading {
        "Loading results...".to_string()
    } else if page.total_items > 0 {
        format!(
            "Showing {}-{} of {} Results",
            page.first_result_index(PAGE_SIZE),
            page.last_result_index(PAGE_SIZE),
            page.total_items
        )
    } else {
        "No results found".to_string()
    };

    rsx! {
        div {
            style: "color: #4B5563; font-size: 15px;",
            "{text}"
        }
    }
}
