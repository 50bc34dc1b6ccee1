use crate::markup::{first_text, is_newline, Node};

/// Joins a run of mixed children into one string. Elements contribute only
/// their first text descendant, newline-only text nodes are layout and dropped.
pub fn reconstruct<'a>(nodes: impl IntoIterator<Item = Node<'a>>) -> String {
    let mut text = String::new();
    for node in nodes {
        match node {
            Node::Text(run) if is_newline(run) => {}
            Node::Text(run) => text.push_str(run),
            Node::Element(element) => {
                if let Some(run) = first_text(element) {
                    text.push_str(run);
                }
            }
        }
    }
    text
}

/// Like [`reconstruct`] but for etymology and usage notes, which the site
/// wraps in literal parentheses.
pub fn annotation<'a>(nodes: impl IntoIterator<Item = Node<'a>>) -> String {
    strip_parentheses(&reconstruct(nodes))
}

pub fn strip_parentheses(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .collect::<String>()
        .trim()
        .to_owned()
}
