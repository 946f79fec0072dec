use url::Url;

/// Asset extensions that are never fetched or converted
pub const SKIP_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".woff", ".woff2", ".ttf",
    ".eot", ".zip", ".jar", ".war", ".pdf",
];

/// Returns true if the URL points at a non-document asset
///
/// Only the path is inspected: the query string and fragment are ignored, and
/// the comparison is case-insensitive.
///
/// # Examples
///
/// ```
/// use doc_mirror::scope::should_skip_url;
///
/// assert!(should_skip_url("https://example.com/docs/logo.PNG"));
/// assert!(should_skip_url("https://example.com/docs/script.js?v=3"));
/// assert!(!should_skip_url("https://example.com/docs/index.html"));
/// ```
pub fn should_skip_url(url: &str) -> bool {
    let path = url_path(url).to_lowercase();
    SKIP_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Extracts the path component, falling back to a manual split for strings
/// the URL parser rejects
fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}
