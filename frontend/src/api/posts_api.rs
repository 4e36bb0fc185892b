//! Client API calls for single records and small strips.

use common::content_item::ContentItem;
use dioxus::prelude::*;


#[server]
pub async fn fetch_post_by_slug(slug: String) -> Result<ContentItem, ServerFnError> {
    let x = backend::api::posts::fetch_post_by_slug(slug).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn fetch_latest_posts(count: u64) -> Result<Vec<ContentItem>, ServerFnError> {
    let x = backend::api::posts::fetch_latest_posts(count).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn fetch_posts_in_category(category_id: u64, count: u64) -> Result<Vec<ContentItem>, ServerFnError> {
    let x = backend::api::posts::fetch_posts_in_category(category_id, count).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn fetch_related_posts(category_id: u64, exclude_id: u64, count: u64) -> Result<Vec<ContentItem>, ServerFnError> {
    let x = backend::api::posts::fetch_related_posts(category_id, exclude_id, count).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
