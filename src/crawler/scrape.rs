use log2::debug;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

use super::config::CrawlerConfig;
use super::error::FetchError;

/// Everything the crawler needs from one fetched page
pub struct Page {
    /// Text of the first `<title>` element, empty when the page has none
    pub title: String,
    /// Raw href values in document order, duplicates included
    pub links: Vec<String>,
}

/// Resolves a link found on `base_url` to an absolute URL, or `None` when
/// the link is not traversable.
///
/// The policy is deliberately literal: absolute http(s) links pass through
/// unchanged and root-relative links are concatenated onto the base string
/// as-is. Everything else (fragments, protocol-relative links, bare
/// relative paths, mailto:, javascript:, empty hrefs) is dropped. A base
/// URL that already carries a path produces a concatenated, not rebased,
/// result; known limitation.
pub fn resolve_link(base_url: &str, raw_link: &str) -> Option<String> {
    if raw_link.starts_with("http://") || raw_link.starts_with("https://") {
        return Some(raw_link.to_string());
    }
    if raw_link.starts_with('/') && !raw_link.starts_with("//") {
        return Some(format!("{}{}", base_url, raw_link));
    }
    None
}

/// Fetches `url` and extracts its title and outbound links.
pub async fn fetch_page(
    url: &str,
    client: &Client,
    config: &CrawlerConfig,
) -> Result<Page, FetchError> {
    let response = client
        .get(url)
        .timeout(Duration::from_secs(config.request_timeout_sec))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let html = response.text().await?;
    let document = Html::parse_document(&html);

    let title_selector =
        Selector::parse("title").map_err(|e| FetchError::Parse(e.to_string()))?;
    let link_selector =
        Selector::parse("a[href]").map_err(|e| FetchError::Parse(e.to_string()))?;

    let title = document
        .select(&title_selector)
        .next()
        .map(|t| t.text().collect::<String>())
        .unwrap_or_default();

    let links: Vec<String> = document
        .select(&link_selector)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect();

    debug!("Found {} links on page {}", links.len(), url);

    Ok(Page { title, links })
}
