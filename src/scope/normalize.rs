use crate::UrlError;
use url::Url;

/// Schemes that never lead to a document
const PSEUDO_SCHEMES: &[&str] = &["mailto:", "javascript:"];

/// Parses an absolute URL and removes its fragment
///
/// The returned string is the key used by the frontier's visited set, so two
/// URLs that differ only after `#` map to the same entry.
///
/// # Examples
///
/// ```
/// use doc_mirror::scope::normalize_url;
///
/// let url = normalize_url("https://example.com/docs/page.html#section").unwrap();
/// assert_eq!(url, "https://example.com/docs/page.html");
/// ```
pub fn normalize_url(url_str: &str) -> Result<String, UrlError> {
    let mut url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;
    url.set_fragment(None);
    Ok(url.to_string())
}

/// Resolves a link href against the page it appears on
///
/// Returns None for empty hrefs, `mailto:`/`javascript:` links, and hrefs
/// that cannot be joined onto `base_url`. The fragment of the resolved URL
/// is removed.
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if PSEUDO_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        return None;
    }

    match base_url.join(href) {
        Ok(mut absolute_url) => {
            absolute_url.set_fragment(None);
            Some(absolute_url.to_string())
        }
        Err(e) => {
            tracing::debug!("Cannot resolve href {:?} against {}: {}", href, base_url, e);
            None
        }
    }
}
