use crate::{UrlError, UrlResult};
use std::path::{Path, PathBuf};

/// File name used for directory URLs
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Extension given to every mirrored file
pub const TEXT_EXTENSION: &str = "txt";

/// Maps a URL under `root` to the text file that mirrors it
///
/// # Mapping Steps
///
/// 1. Remove the `root` prefix (a leftover leading `/` is dropped too)
/// 2. Empty or directory-like remainders get `index.html` appended
/// 3. The query string is dropped
/// 4. `.html`/`.htm` become `.txt`; any other name gets `.txt` appended
/// 5. The segments are joined onto `out_dir`
///
/// `.` and `..` segments are ignored so the result always stays inside
/// `out_dir`. URLs that differ only in their query map to the same file.
///
/// # Examples
///
/// ```
/// use doc_mirror::output::url_to_path;
/// use std::path::{Path, PathBuf};
///
/// let path = url_to_path(
///     "https://site/root/api/Foo.html?lang=en",
///     "https://site/root/",
///     Path::new("out"),
/// )
/// .unwrap();
/// assert_eq!(path, PathBuf::from("out/api/Foo.txt"));
/// ```
pub fn url_to_path(url: &str, root: &str, out_dir: &Path) -> UrlResult<PathBuf> {
    let rel = url
        .strip_prefix(root)
        .ok_or_else(|| UrlError::OutsideRoot {
            url: url.to_string(),
            root: root.to_string(),
        })?
        .trim_start_matches('/');

    let mut rel = rel.to_string();
    if rel.is_empty() || rel.ends_with('/') {
        rel.push_str(DEFAULT_DOCUMENT);
    }

    let rel = rel.split('?').next().unwrap_or_default();

    let mut path = out_dir.to_path_buf();
    let mut pushed = false;
    for segment in rel
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
    {
        path.push(segment);
        pushed = true;
    }
    if !pushed {
        path.push(DEFAULT_DOCUMENT);
    }

    let is_html = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        .unwrap_or(false);

    if is_html {
        path.set_extension(TEXT_EXTENSION);
    } else if let Some(name) = path.file_name().map(|n| n.to_os_string()) {
        let mut name = name;
        name.push(".");
        name.push(TEXT_EXTENSION);
        path.set_file_name(name);
    }

    Ok(path)
}
