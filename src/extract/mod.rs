//! Page-to-text conversion
//!
//! This module turns a fetched HTML page into the plain text that is written
//! to disk:
//! - choosing the main content region of the page
//! - rendering that region structurally (headings, lists, code, tables)
//! - normalizing whitespace in the result

mod content;
mod normalize;
mod text;

pub use content::select_main_content;
pub use normalize::normalize_text;
pub use text::render_element;

use scraper::{ElementRef, Html};

/// Converts a complete HTML document to normalized text
///
/// Malformed markup is not an error: the parser recovers what structure it
/// can and the conversion works on that.
///
/// # Example
///
/// ```
/// use doc_mirror::extract::html_to_text;
///
/// let text = html_to_text("<html><body><nav>Menu</nav><main><h2>Title</h2><p>Body &amp; text</p></main></body></html>");
/// assert_eq!(text, "## Title\n\nBody & text\n");
/// ```
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let content = select_main_content(&document);
    element_to_text(content)
}

/// Renders and normalizes a single element subtree
pub fn element_to_text(element: ElementRef<'_>) -> String {
    normalize_text(&render_element(element))
}
