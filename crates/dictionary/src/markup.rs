//! Thin typed view over the parsed document.
//!
//! Dictionary pages mix bare text and inline wrappers freely, so every child
//! is handed to the extractors as a [`Node`] and matched on, instead of being
//! probed for whatever properties it happens to have.

use scraper::{ElementRef, Selector};

use crate::error::ExtractionError;

#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Text(&'a str),
    Element(ElementRef<'a>),
}

impl<'a> Node<'a> {
    pub fn as_element(&self) -> Option<ElementRef<'a>> {
        match self {
            Node::Element(element) => Some(*element),
            Node::Text(_) => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.as_element()
            .map_or(false, |element| has_class(element, class))
    }
}

/// Direct children of `element`, comments and processing instructions skipped.
pub fn children<'a>(element: ElementRef<'a>) -> impl Iterator<Item = Node<'a>> + 'a {
    element.children().filter_map(|child| match child.value() {
        scraper::Node::Text(text) => Some(Node::Text(&**text)),
        scraper::Node::Element(_) => ElementRef::wrap(child).map(Node::Element),
        _ => None,
    })
}

/// Closest element before `element` among its siblings, text in between ignored.
pub fn previous_element_sibling(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.prev_siblings().find_map(ElementRef::wrap)
}

pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|candidate| candidate == class)
}

/// Text of the first text node below `element`. Inline wrappers on these
/// pages carry a single run of text, possibly under one more wrapper.
pub fn first_text(element: ElementRef<'_>) -> Option<&str> {
    element.text().next()
}

pub fn is_newline(text: &str) -> bool {
    text == "\n"
}

pub fn compile(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|error| ExtractionError::InvalidSelector {
        selector: selector.to_owned(),
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn root(html: &Html) -> ElementRef<'_> {
        let selector = compile("#root").unwrap();
        html.select(&selector).next().unwrap()
    }

    #[test]
    fn children_are_typed_in_document_order() {
        let html = Html::parse_fragment(r#"<p id="root">one <em class="x">two</em><!-- c -->three</p>"#);
        let nodes: Vec<Node> = children(root(&html)).collect();
        assert_eq!(nodes.len(), 3);
        assert!(matches!(nodes[0], Node::Text("one ")));
        assert!(nodes[1].has_class("x"));
        assert!(matches!(nodes[2], Node::Text("three")));
    }

    #[test]
    fn first_text_reaches_nested_wrappers() {
        let html = Html::parse_fragment(r#"<a id="root"><em>latín</em> vulgar</a>"#);
        assert_eq!(first_text(root(&html)), Some("latín"));
    }

    #[test]
    fn previous_element_sibling_skips_text() {
        let html = Html::parse_fragment("<div><span>label</span>\n<div id=\"root\"></div></div>");
        let label = previous_element_sibling(root(&html)).unwrap();
        assert_eq!(first_text(label), Some("label"));
    }

    #[test]
    fn bad_selector_is_an_extraction_error() {
        assert!(matches!(
            compile("li..j"),
            Err(ExtractionError::InvalidSelector { .. })
        ));
    }
}
