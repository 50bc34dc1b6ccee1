use scraper::ElementRef;
use tracing::warn;

use super::onyms::OnymKind;
use super::Extractor;
use crate::dictionary::Definition;
use crate::markup::{children, has_class, Node};

/// Left behind in the text right before a synonym or antonym list.
const LIST_LEAD_IN: &str = "\u{a0}:";

impl Extractor<'_> {
    pub fn definition(&self, item: ElementRef<'_>) -> Definition {
        let markup = self.markup;
        let mut definition = Definition::default();
        let mut text = String::new();

        for node in children(item) {
            match node {
                Node::Text(run) => {
                    if !run.trim().is_empty() {
                        text.push_str(run);
                    }
                }
                Node::Element(element) if has_class(element, &markup.number_class) => {
                    definition.number = parse_number(element);
                }
                Node::Element(element) if has_class(element, &markup.see_also_class) => {
                    text.extend(element.text());
                }
                Node::Element(element) if has_class(element, &markup.example_class) => {
                    let example = element.text().collect::<String>();
                    definition.examples.push(example.trim().to_owned());
                }
                Node::Element(element) if has_class(element, &markup.onym_list_class) => {
                    let onyms = self.onyms(element);
                    match self.onym_kind(element) {
                        OnymKind::Synonyms => definition.synonyms = onyms,
                        OnymKind::Antonyms => definition.antonyms = onyms,
                    }
                }
                Node::Element(_) => {}
            }
        }

        definition.text = text.replace(LIST_LEAD_IN, "").trim().to_owned();
        definition
    }
}

/// `"12. "` becomes `12`.
fn parse_number(marker: ElementRef<'_>) -> Option<u32> {
    let label = marker.text().collect::<String>();
    let token = label.split('.').next().unwrap_or_default().trim();
    match token.parse::<u32>() {
        Ok(number) if number > 0 => Some(number),
        _ => {
            warn!(label = %label, "definition number is not a positive integer");
            None
        }
    }
}
