//! Single-record and small-strip fetches.

use anyhow::Context;

use common::content_item::ContentItem;

use crate::content_source::client::get_with_totals;
use crate::content_source::wire::{WireRecord, parse_records};

/// Fetch one record by slug, with embedded media/taxonomy data.
pub async fn fetch_post_by_slug(slug: String) -> anyhow::Result<ContentItem> {
    let params = vec![
        ("slug".to_string(), slug.clone()),
        ("_embed".to_string(), "true".to_string()),
    ];
    let fetched = get_with_totals("posts", &params).await?;
    let records = parse_records(&fetched.body)?;

    let record = records
        .into_iter()
        .next()
        .with_context(|| format!("Post not found: {slug}"))?;
    Ok(record.into_content_item())
}

/// Latest records, newest first (content-source order).
pub async fn fetch_latest_posts(count: u64) -> anyhow::Result<Vec<ContentItem>> {
    fetch_post_strip(&[
        ("per_page".to_string(), count.to_string()),
        ("_embed".to_string(), "true".to_string()),
    ])
    .await
}

/// Records from one category, e.g. the data-stories reports strip.
pub async fn fetch_posts_in_category(
    category_id: u64,
    count: u64,
) -> anyhow::Result<Vec<ContentItem>> {
    fetch_post_strip(&[
        ("per_page".to_string(), count.to_string()),
        ("categories".to_string(), category_id.to_string()),
        ("_embed".to_string(), "true".to_string()),
    ])
    .await
}

/// Related records: same category, excluding the record itself.
pub async fn fetch_related_posts(
    category_id: u64,
    exclude_id: u64,
    count: u64,
) -> anyhow::Result<Vec<ContentItem>> {
    fetch_post_strip(&[
        ("categories".to_string(), category_id.to_string()),
        ("exclude".to_string(), exclude_id.to_string()),
        ("per_page".to_string(), count.to_string()),
        ("_embed".to_string(), "true".to_string()),
    ])
    .await
}

async fn fetch_post_strip(params: &[(String, String)]) -> anyhow::Result<Vec<ContentItem>> {
    let fetched = get_with_totals("posts", params).await?;
    let records = parse_records(&fetched.body)?;
    Ok(records.into_iter().map(WireRecord::into_content_item).collect())
}
