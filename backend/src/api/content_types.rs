//! Probe which custom post types the content source exposes.

use std::collections::BTreeMap;

use anyhow::Context;

use common::ecosystem::ContentTypeSupport;

use crate::content_source::client::get_with_totals;

/// Ask the content source's type index for the ecosystem post types.
/// Callers treat a failed probe as "neither" and use the fallback path.
pub async fn probe_content_types() -> anyhow::Result<ContentTypeSupport> {
    let fetched = get_with_totals("types", &[]).await?;
    let types: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(&fetched.body).context("malformed type index response")?;

    Ok(ContentTypeSupport {
        organisation: types.contains_key("organisation"),
        policy: types.contains_key("policy"),
    })
}
