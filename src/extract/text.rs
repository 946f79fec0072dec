//! Structural HTML-to-text rendering
//!
//! The walk is depth-first and left-to-right. Block elements open with a
//! newline before their children and close with one after; inline elements
//! add nothing, so their text simply concatenates. Headings, list items,
//! tables and preformatted blocks are rendered from their text as a unit and
//! their children are not walked again.

use scraper::node::Node;
use scraper::ElementRef;

/// Elements removed together with their content
const JUNK_TAGS: &[&str] = &["script", "style", "noscript"];

/// Page chrome removed by tag name
const NAVIGATION_TAGS: &[&str] = &["nav", "header", "footer"];

/// Page chrome removed when the class attribute contains one of these
const NAVIGATION_CLASS_MARKERS: &[&str] = &[
    "navbar", "navlist", "header", "footer", "side", "sidebar", "indexnav", "topnav",
];

/// Elements that start and end on their own line
const BLOCK_TAGS: &[&str] = &[
    "p",
    "div",
    "section",
    "article",
    "main",
    "ul",
    "ol",
    "blockquote",
    "dl",
    "dt",
    "dd",
];

const RULE_WIDTH: usize = 40;

/// Renders an element subtree to text, before normalization
pub fn render_element(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    walk_element(element, &mut out);
    out
}

fn walk_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();

    if is_junk(&element) || is_navigation(&element) {
        return;
    }

    if let Some(level) = heading_level(name) {
        out.push_str("\n\n");
        out.push_str(&"#".repeat(level));
        out.push(' ');
        out.push_str(&flattened_text(element));
        out.push_str("\n\n");
        return;
    }

    match name {
        "pre" => {
            let mut code = String::new();
            collect_raw_text(element, &mut code);
            out.push_str("\n\n```\n");
            out.push_str(code.trim_end());
            out.push_str("\n```\n\n");
        }
        "table" => {
            out.push_str("\n\n");
            out.push_str(&table_to_text(element));
            out.push_str("\n\n");
        }
        "br" => out.push('\n'),
        "li" => {
            let text = flattened_text(element);
            if !text.is_empty() {
                out.push_str("\n- ");
                out.push_str(&text);
                out.push('\n');
            }
        }
        "hr" => {
            out.push_str("\n\n");
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push_str("\n\n");
        }
        _ => {
            let is_block = BLOCK_TAGS.contains(&name);
            if is_block {
                out.push('\n');
            }
            walk_children(element, out);
            if is_block {
                out.push('\n');
            }
        }
    }
}

fn walk_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    walk_element(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn heading_level(name: &str) -> Option<usize> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn is_junk(element: &ElementRef<'_>) -> bool {
    JUNK_TAGS.contains(&element.value().name())
}

fn is_navigation(element: &ElementRef<'_>) -> bool {
    if NAVIGATION_TAGS.contains(&element.value().name()) {
        return true;
    }

    let classes = element
        .value()
        .classes()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    !classes.is_empty()
        && NAVIGATION_CLASS_MARKERS
            .iter()
            .any(|marker| classes.contains(marker))
}

/// Text of every descendant, each piece trimmed, joined by single spaces
fn flattened_text(element: ElementRef<'_>) -> String {
    let mut pieces = Vec::new();
    collect_text_pieces(element, &mut pieces);
    pieces.join(" ")
}

fn collect_text_pieces<'a>(element: ElementRef<'a>, pieces: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let piece = text.text.trim();
                if !piece.is_empty() {
                    pieces.push(piece);
                }
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    if !is_junk(&child_element) {
                        collect_text_pieces(child_element, pieces);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Text of every descendant exactly as written, line breaks included
fn collect_raw_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    if !is_junk(&child_element) {
                        collect_raw_text(child_element, out);
                    }
                }
            }
            _ => {}
        }
    }
}

/// One line per row, cells joined by `" | "`; rows without cells are dropped
fn table_to_text(table: ElementRef<'_>) -> String {
    let rows: Vec<String> = descendant_elements(table, &["tr"])
        .map(|row| {
            descendant_elements(row, &["th", "td"])
                .map(flattened_text)
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .map(|cells| cells.join(" | "))
        .collect();

    rows.join("\n")
}

fn descendant_elements<'a>(
    element: ElementRef<'a>,
    names: &'a [&'a str],
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |e| names.contains(&e.value().name()))
}
