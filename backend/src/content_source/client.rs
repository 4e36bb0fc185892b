//! HTTP client for the remote content API.

use anyhow::Context;

/// Base URL of the content API, e.g. `https://example.org/wp-json/wp/v2`.
pub fn content_api_url() -> String {
    std::env::var("CONTENT_API_URL")
        .unwrap_or_else(|_| "https://inclusion-for-all.org/wp-json/wp/v2".to_string())
}

/// Raw response body plus the out-of-band pagination totals the content
/// source reports in headers.
#[derive(Debug)]
pub struct FetchedPage {
    pub body: String,
    pub total_items: Option<String>,
    pub total_pages: Option<String>,
}

/// One GET against the content source. No retries: a failed request is
/// terminal for the triggering user action.
pub async fn get_with_totals(
    endpoint: &str,
    params: &[(String, String)],
) -> anyhow::Result<FetchedPage> {
    let url = format!("{}/{}", content_api_url(), endpoint);
    let client = reqwest::Client::new();

    let response = client
        .get(&url)
        .query(params)
        .send()
        .await
        .with_context(|| format!("content source unreachable: {url}"))?;

    let status = response.status();
    let total_items = header_string(&response, "X-WP-Total");
    let total_pages = header_string(&response, "X-WP-TotalPages");
    let body = response.text().await?;

    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(%url, %status, "content source error");
        anyhow::bail!("content source returned {status} for {endpoint}");
    }
    tracing::debug!(%url, len = body.len(), "content source responded");

    Ok(FetchedPage {
        body,
        total_items,
        total_pages,
    })
}

fn header_string(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
