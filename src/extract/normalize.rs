use regex::Regex;
use std::sync::LazyLock;

static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("hardcoded regex pattern is valid"));

static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("hardcoded regex pattern is valid"));

static BLANK_LINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("hardcoded regex pattern is valid"));

/// Normalizes assembled page text
///
/// 1. CRLF and lone CR become LF
/// 2. Runs of spaces and tabs collapse to one space
/// 3. Spaces before a newline are removed
/// 4. Three or more newlines collapse to two (at most one blank line)
/// 5. The whole text is trimmed and ends with exactly one newline
///
/// Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use doc_mirror::extract::normalize_text;
///
/// assert_eq!(normalize_text("  a \t b  \r\n\r\n\r\nc  "), "a b\n\nc\n");
/// ```
pub fn normalize_text(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = HORIZONTAL_WHITESPACE.replace_all(&text, " ");
    let text = TRAILING_WHITESPACE.replace_all(&text, "\n");
    let text = BLANK_LINE_RUNS.replace_all(&text, "\n\n");

    let mut normalized = text.trim().to_string();
    normalized.push('\n');
    normalized
}
