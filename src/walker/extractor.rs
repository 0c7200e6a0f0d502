//! HTML link extraction
//!
//! Parses page content and returns the outbound links in document order,
//! resolved to absolute URLs against the page's own address.

use scraper::{Html, Selector};
use url::Url;

/// Capability for extracting outbound links from page content
///
/// Implementations are total: malformed input yields an empty sequence, not
/// an error. Order must follow anchor occurrence in the document, and
/// duplicates within one page are preserved.
pub trait LinkExtractor {
    fn extract_links(&self, html: &str, base_url: &Url) -> Vec<String>;
}

/// Production extractor built on the `scraper` HTML parser
///
/// # Link Extraction Rules
///
/// **Include:** `<a href="...">` tags, in document order.
///
/// **Exclude:**
/// - `<a href="..." download>`
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
/// - Fragment-only hrefs (same-page anchors)
/// - Anything that does not resolve to http/https
#[derive(Debug, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, html: &str, base_url: &Url) -> Vec<String> {
        let document = Html::parse_document(html);
        let mut links = Vec::new();

        if let Ok(a_selector) = Selector::parse("a[href]") {
            for element in document.select(&a_selector) {
                if element.value().attr("download").is_some() {
                    continue;
                }

                if let Some(href) = element.value().attr("href") {
                    if let Some(absolute_url) = resolve_link(href, base_url) {
                        links.push(absolute_url);
                    }
                }
            }
        }

        links
    }
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded.
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Fragment-only links point back at the same page
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
