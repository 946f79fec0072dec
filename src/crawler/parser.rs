//! Link extraction from fetched pages
//!
//! Links are mined from the raw HTML of the whole page, not just the content
//! region, so navigation menus still feed the frontier.

use crate::scope::resolve_link;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Extracts every followable link from an HTML document
///
/// # Link Extraction Rules
///
/// - Every `<a href="...">` with a non-empty href is considered
/// - `mailto:` and `javascript:` hrefs are skipped
/// - Relative, parent-relative and root-relative hrefs are resolved against
///   `base_url`
/// - Fragments are removed, so `page.html#a` and `page.html#b` collapse
///
/// # Example
///
/// ```
/// use doc_mirror::crawler::extract_links;
/// use url::Url;
///
/// let base = Url::parse("https://site/root/sub/page.html").unwrap();
/// let links = extract_links(r#"<a href="../x/y.html#frag">Y</a>"#, &base);
/// assert!(links.contains("https://site/root/x/y.html"));
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> BTreeSet<String> {
    let document = Html::parse_document(html);
    let mut links = BTreeSet::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.insert(absolute_url);
                }
            }
        }
    }

    links
}
