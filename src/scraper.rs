//! Web scraping module for article text extraction.
//!
//! Uses reqwest for fetching and scraper for HTML parsing. Main-content
//! containers are tried first; the fallback collects paragraph, heading
//! and list text from the whole page.

use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;

/// User-Agent string identifying this tool
const USER_AGENT: &str =
    concat!("condense/", env!("CARGO_PKG_VERSION"), " (https://github.com/condense-cli/condense)");

/// Containers likely to hold the article body, in preference order
const MAIN_SELECTORS: [&str; 5] = ["article", "main", "[role='main']", ".content", "#content"];

/// Fragments shorter than this are treated as navigation noise
const MIN_FRAGMENT_LEN: usize = 20;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("no content found at URL")]
    NoContent,
}

/// A fetched web page reduced to title and readable text.
#[derive(Debug, Clone)]
pub struct Page {
    /// Page title, from `<title>` or the first `<h1>`.
    pub title: Option<String>,
    /// Readable body text.
    pub text: String,
}

/// Create a configured HTTP client.
pub(crate) fn create_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).timeout(timeout).build()
}

/// Fetch a URL and extract its readable text.
pub async fn fetch_page(url: &str, timeout: Duration) -> Result<Page, ScrapeError> {
    let client = create_client(timeout)?;
    let html = client.get(url).send().await?.text().await?;
    let page = parse_page(&html);

    if page.text.trim().is_empty() {
        return Err(ScrapeError::NoContent);
    }
    Ok(page)
}

/// Reduce an HTML document to title and readable text.
fn parse_page(html: &str) -> Page {
    let document = Html::parse_document(html);
    Page {
        title: extract_title(&document),
        text: extract_text(&document),
    }
}

/// Extract the page title from `<title>` or the first `<h1>`.
fn extract_title(document: &Html) -> Option<String> {
    for selector_str in ["title", "h1"] {
        let selector = Selector::parse(selector_str).expect("valid selector");
        if let Some(element) = document.select(&selector).next() {
            let title: String = element.text().collect();
            let title = title.trim();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }
    None
}

/// Extract readable text, preferring main-content containers.
fn extract_text(document: &Html) -> String {
    for selector_str in MAIN_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let fragment = Html::parse_fragment(&element.html());
                let text = collect_fragments(&fragment);
                if !text.trim().is_empty() {
                    return text;
                }
            }
        }
    }

    // No recognised container: collect from the whole page.
    collect_fragments(document)
}

/// Gather paragraph, heading and list-item text, skipping short noise.
fn collect_fragments(document: &Html) -> String {
    let selector = Selector::parse("p, h1, h2, h3, h4, h5, h6, li").expect("valid selector");

    let mut fragments: Vec<String> = Vec::new();
    for element in document.select(&selector) {
        let text: String = element.text().collect::<Vec<_>>().join(" ");
        let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if cleaned.len() >= MIN_FRAGMENT_LEN {
            fragments.push(cleaned);
        }
    }
    fragments.join("\n\n")
}
