use scraper::ElementRef;

use super::text::annotation;
use super::Extractor;
use crate::dictionary::Onym;
use crate::markup::{children, first_text, previous_element_sibling, Node};

const SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnymKind {
    Synonyms,
    Antonyms,
}

impl Extractor<'_> {
    /// Synonym and antonym lists share one class on the page and only the
    /// label placed before the list tells them apart. The label has to match
    /// one of the synonym introducers exactly, anything else is an antonym list.
    pub fn onym_kind(&self, list: ElementRef<'_>) -> OnymKind {
        let label = previous_element_sibling(list).map(|label| label.text().collect::<String>());
        match label {
            Some(label)
                if self
                    .markup
                    .synonym_labels
                    .iter()
                    .any(|introducer| introducer == label.trim()) =>
            {
                OnymKind::Synonyms
            }
            _ => OnymKind::Antonyms,
        }
    }

    /// Reads a list such as `<a>sommeiller</a> - reposer - pioncer <span>(familier)</span>`.
    pub fn onyms(&self, list: ElementRef<'_>) -> Vec<Onym> {
        let nodes: Vec<Node> = children(list).collect();
        let mut onyms = Vec::new();
        for (index, node) in nodes.iter().enumerate() {
            match *node {
                Node::Text(run) => {
                    let words: Vec<&str> = run
                        .split(SEPARATOR)
                        .map(str::trim)
                        .filter(|word| !word.is_empty())
                        .collect();
                    let Some((last, rest)) = words.split_last() else {
                        continue;
                    };
                    onyms.extend(rest.iter().copied().map(Onym::plain));
                    let mut onym = Onym::plain(*last);
                    onym.info = self.annotation_after(&nodes, index);
                    onyms.push(onym);
                }
                Node::Element(element) if element.value().name() == "a" => {
                    let word = first_text(element).unwrap_or_default().trim();
                    if word.is_empty() {
                        continue;
                    }
                    onyms.push(Onym {
                        word: word.to_owned(),
                        url: element.value().attr("href").map(|href| self.resolve(href)),
                        info: None,
                    });
                }
                Node::Element(_) => {}
            }
        }
        onyms
    }

    fn annotation_after(&self, nodes: &[Node<'_>], index: usize) -> Option<String> {
        let marker = nodes
            .get(index + 1)
            .filter(|node| node.has_class(&self.markup.annotation_class))
            .and_then(Node::as_element)?;
        let info = annotation(children(marker));
        (!info.is_empty()).then_some(info)
    }
}
