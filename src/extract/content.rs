use scraper::{ElementRef, Html};

/// Predicate identifying one kind of content container
type ContainerPredicate = fn(&ElementRef<'_>) -> bool;

/// Container heuristics in priority order. Javadoc moved its content wrapper
/// between releases; newer versions use `<main>`.
const CONTAINER_PREDICATES: &[(&str, ContainerPredicate)] = &[
    ("main", is_main),
    ("div.contentContainer", is_content_container_div),
    ("div.content", is_content_div),
    ("div#content", is_content_id_div),
    ("article", is_article),
    ("body", is_body),
];

/// Selects the element that holds the page's substantive content
///
/// Each predicate is tried in order against every element in document order;
/// the first element matching the earliest predicate wins. When nothing
/// matches, the document's root element is returned.
pub fn select_main_content(document: &Html) -> ElementRef<'_> {
    let root = document.root_element();

    for (label, predicate) in CONTAINER_PREDICATES {
        if let Some(found) = root
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|element| predicate(element))
        {
            tracing::trace!("Content region selected by {}", label);
            return found;
        }
    }

    root
}

fn is_main(element: &ElementRef<'_>) -> bool {
    element.value().name() == "main"
}

fn is_content_container_div(element: &ElementRef<'_>) -> bool {
    is_div_with_class(element, "contentContainer")
}

fn is_content_div(element: &ElementRef<'_>) -> bool {
    is_div_with_class(element, "content")
}

fn is_content_id_div(element: &ElementRef<'_>) -> bool {
    element.value().name() == "div" && element.value().id() == Some("content")
}

fn is_article(element: &ElementRef<'_>) -> bool {
    element.value().name() == "article"
}

fn is_body(element: &ElementRef<'_>) -> bool {
    element.value().name() == "body"
}

fn is_div_with_class(element: &ElementRef<'_>, class: &str) -> bool {
    element.value().name() == "div" && element.value().classes().any(|c| c == class)
}
