//! Filtered listing pipeline: query construction and page fetches.

mod query_params;
pub use query_params::build_listing_params;

mod fetch_listing_page;
pub use fetch_listing_page::fetch_listing_page;

mod ecosystem;
pub use ecosystem::{build_ecosystem_request, fetch_ecosystem_page};
