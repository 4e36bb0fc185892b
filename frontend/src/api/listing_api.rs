//! Client API calls for listing endpoints.

use common::content_item::ListingPage;
use common::ecosystem::{ContentTypeSupport, EcosystemKind};
use common::listing_query::ListingQuery;
use dioxus::prelude::*;


#[server]
pub async fn fetch_listing_page(query: ListingQuery, page: u64) -> Result<ListingPage, ServerFnError> {
    let x = backend::api::listing::fetch_listing_page(query, page).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn fetch_ecosystem_page(
    kind: EcosystemKind,
    query: ListingQuery,
    page: u64,
    support: ContentTypeSupport,
) -> Result<ListingPage, ServerFnError> {
    let x = backend::api::listing::fetch_ecosystem_page(kind, query, page, support).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn probe_content_types() -> Result<ContentTypeSupport, ServerFnError> {
    let x = backend::api::content_types::probe_content_types().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
